//! Terminal game renderer.
//!
//! Rendering is split in two: [`game_view`] draws a snapshot into a
//! [`FrameBuffer`] with no I/O, and [`renderer`] flushes framebuffers to the
//! terminal, rewriting only cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{rgb_of, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
