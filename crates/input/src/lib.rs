//! Input module (engine-facing).
//!
//! Independent of any game state: [`conditioner`] turns key edges into
//! triggers with DAS/ARR timing, and [`map`] translates `crossterm` key events
//! into [`crate::types::InputKey`].

pub mod conditioner;
pub mod map;

pub use blockfall_types as types;

pub use conditioner::{DasConfig, InputConditioner, Repeats};
pub use map::{map_key, should_quit};
