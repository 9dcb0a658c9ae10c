//! Input conditioner timing driven with synthetic frame timestamps

use blockfall::core::Settings;
use blockfall::input::InputConditioner;
use blockfall::types::{DasKey, InputKey, FRAME_MS};

#[test]
fn test_delay_then_single_repeat_then_interval() {
    let mut ic = InputConditioner::new();
    let t0 = 5_000;
    assert_eq!(ic.key_down(InputKey::LEFT, t0), Some(InputKey::LEFT));

    assert!(ic.process_input(t0).is_empty(), "delay not yet elapsed");
    assert_eq!(ic.process_input(t0 + 150).as_slice(), &[DasKey::Left]);
    assert!(ic.process_input(t0 + 150).is_empty());
    assert!(ic.process_input(t0 + 199).is_empty());
    assert_eq!(ic.process_input(t0 + 200).as_slice(), &[DasKey::Left]);
}

#[test]
fn test_frame_stepped_repeat_count() {
    // Held for one second, polled every frame: 1 press + repeats from 150ms
    // on, one per 50ms but quantized to frame boundaries.
    let mut ic = InputConditioner::new();
    let mut moves = 0;
    if ic.key_down(InputKey::RIGHT, 0).is_some() {
        moves += 1;
    }
    let mut t = 0u64;
    while t <= 1_000 {
        moves += ic.process_input(t).len();
        t += u64::from(FRAME_MS);
    }
    ic.key_up(InputKey::RIGHT);
    assert!(ic.process_input(t).is_empty());

    // 16ms frames make each repeat land on the first frame at least 50ms
    // after the previous one (64ms apart), starting at 160ms.
    let expected_repeats = (160..=1_000).step_by(64).count();
    assert_eq!(moves, 1 + expected_repeats);
}

#[test]
fn test_settings_drive_timing() {
    let mut ic = InputConditioner::from_settings(&Settings::from_raw(0, 100, 25, 100));
    ic.key_down(InputKey::LEFT, 0);
    ic.key_down(InputKey::SOFT_DROP, 0);

    assert!(ic.process_input(24).is_empty());
    assert_eq!(ic.process_input(25).as_slice(), &[DasKey::SoftDrop]);
    assert_eq!(ic.process_input(100).as_slice(), &[DasKey::Left, DasKey::SoftDrop]);
}

#[test]
fn test_one_shot_requires_new_edge() {
    let mut ic = InputConditioner::new();
    for key in [InputKey::RotateCw, InputKey::RotateCcw, InputKey::HardDrop, InputKey::Pause, InputKey::Start] {
        assert_eq!(ic.key_down(key, 0), Some(key));
        assert_eq!(ic.key_down(key, 16), None);
        assert!(ic.process_input(1_000).is_empty(), "one-shot keys never repeat");
        ic.key_up(key);
        assert_eq!(ic.key_down(key, 1_016), Some(key));
        ic.key_up(key);
    }
}
