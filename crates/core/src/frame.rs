//! Frame module - read-only copy of the session for renderers
//!
//! Renderers never borrow the live board. They get a fixed-size `Frame` that
//! the session fills in place, so a host can keep one frame around and refresh
//! it every draw without allocating.

use crate::types::{Shape, Status, BOARD_HEIGHT, BOARD_WIDTH};

/// The falling piece as a renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveFrame {
    pub shape: Shape,
    /// Absolute board coordinates; may include hidden rows
    pub cells: [(i8, i8); 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Cell codes, row-major, top row first (0 = empty)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// `None` once the game is over
    pub active: Option<ActiveFrame>,
    pub next: Shape,
    pub score: u32,
    pub status: Status,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: Shape::I,
            score: 0,
            status: Status::Running,
        }
    }
}
