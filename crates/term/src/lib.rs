//! Terminal rendering for blockfall.
//!
//! The view layer renders a core [`core::Frame`] into a plain framebuffer of
//! styled characters, which [`TerminalRenderer`] then flushes to the terminal.
//! Board squares are drawn two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use renderer::{encode_changes, encode_repaint, TerminalRenderer};
