//! Blockfall terminal runner (default binary).
//!
//! Polls crossterm for key edges, drives the engine once per frame and draws
//! with the framebuffer renderer.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use log::{info, warn, LevelFilter};

use blockfall::core::leaderboard::normalize_name;
use blockfall::core::scoring::is_new_high_score;
use blockfall::core::store::Store;
use blockfall::core::{
    clear_leaderboard, record_score, Clock, GameSession, GameSnapshot, Leaderboard,
    LeaderboardEntry, MonotonicClock, Settings,
};
use blockfall::engine::Engine;
use blockfall::input::{map_key, should_quit, InputConditioner};
use blockfall::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockfall::types::InputKey;
use blockfall::{BellAudio, FileLogger, JsonFileStore, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = &config.log_path {
        FileLogger::open(Path::new(path), LevelFilter::Debug)?.install()?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let release_events = enable_release_events();

    let result = run(&config, &mut term, release_events);

    // Always try to restore terminal state.
    if release_events {
        let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = term.exit();
    result
}

/// Ask the terminal for key release events. Returns whether it agreed.
fn enable_release_events() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        return false;
    }
    execute!(
        std::io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok()
}

fn load_or_default<T: Default, S: Store<T>>(store: &S, what: &str) -> T {
    match store.load() {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!("could not load {}: {}", what, e);
            T::default()
        }
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn run(config: &RunConfig, term: &mut TerminalRenderer, release_events: bool) -> Result<()> {
    let settings_store = JsonFileStore::<Settings>::new(config.settings_path());
    let leaderboard_store = JsonFileStore::<Leaderboard>::new(config.leaderboard_path());
    let player_store = JsonFileStore::<String>::new(config.player_path());

    let settings: Settings = load_or_default(&settings_store, "settings");
    let settings = settings.sanitized();
    if let Err(e) = settings_store.save(&settings) {
        warn!("could not save settings: {}", e);
    }
    let player = match &config.player {
        Some(name) => {
            let name = normalize_name(name);
            if let Err(e) = player_store.save(&name) {
                warn!("could not save player name: {}", e);
            }
            name
        }
        None => normalize_name(&load_or_default::<String, _>(&player_store, "player name")),
    };
    if config.clear_leaderboard {
        if let Err(e) = clear_leaderboard(&leaderboard_store) {
            warn!("could not clear leaderboard: {}", e);
        }
    }
    let leaderboard: Leaderboard = load_or_default(&leaderboard_store, "leaderboard");
    let mut hud = Hud {
        high_score: leaderboard.high_score(),
        new_high_score: false,
    };
    info!("player {} with settings {:?}", player, settings);

    let session = match config.seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };
    let timeout = if release_events {
        None
    } else {
        config.release_timeout_ms
    };
    let mut engine = Engine::new(session, BellAudio::stdout(), settings)
        .with_input(InputConditioner::new().with_release_timeout_ms(timeout));

    let clock = MonotonicClock::new();
    let frame = Duration::from_millis(config.frame_ms);
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut next_frame_ms = clock.now_ms();

    loop {
        // Input until the next frame is due.
        let wait = next_frame_ms.saturating_sub(clock.now_ms());
        if event::poll(Duration::from_millis(wait))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(game_key) = map_key(key) {
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => {
                                if game_key == InputKey::Start {
                                    hud.new_high_score = false;
                                }
                                engine.key_down(game_key, clock.now_ms());
                            }
                            KeyEventKind::Release => engine.key_up(game_key),
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = clock.now_ms();
        if now < next_frame_ms {
            continue;
        }
        next_frame_ms = now + frame.as_millis() as u64;
        engine.frame(now);

        if let Some(result) = engine.take_finished_game() {
            let entry =
                LeaderboardEntry::new(&player, result.score, result.level, result.lines, epoch_ms());
            hud.new_high_score = is_new_high_score(result.score, hud.high_score);
            if result.score > 0 {
                match record_score(&leaderboard_store, entry) {
                    Ok(_) => {
                        hud.high_score = hud.high_score.max(Some(result.score));
                    }
                    Err(e) => warn!("could not save score: {}", e),
                }
            }
        }

        engine.snapshot_into(&mut snapshot);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, &hud, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
