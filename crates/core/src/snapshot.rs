//! Snapshot module - persistable value of a game session
//!
//! A [`Snapshot`] holds exactly what is needed to rebuild a running session:
//! board contents, the falling piece, the next shape and the score. It is a
//! plain owned value with no references into the live session. Encoding and
//! file handling belong to the caller (see the `blockfall-store` crate).
//!
//! Restoring validates the value and reports a [`SnapshotError`] instead of
//! producing a session that cannot be played.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pieces::Piece;
use crate::types::{Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// How far a stored piece origin may sit outside the grid. Any real piece
/// with its origin this far out already has a cell off the board.
const ORIGIN_MARGIN: i8 = 4;

/// Why a snapshot could not be turned back into a session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot: expected {expected} board rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("invalid snapshot: board row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid snapshot: cell ({x}, {y}) has unknown code {code}")]
    InvalidCell { x: usize, y: usize, code: u8 },
    #[error("invalid snapshot: rotation index {0} is not in 0..4")]
    InvalidRotation(u8),
    #[error("invalid snapshot: piece origin ({x}, {y}) is far outside the board")]
    OutOfRange { x: i8, y: i8 },
    #[error("invalid snapshot: current piece does not fit on the board")]
    PieceCollision,
}

/// The falling piece, with the rotation stored as its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation.index(),
            x: value.x,
            y: value.y,
        }
    }
}

impl TryFrom<ActiveSnapshot> for Piece {
    type Error = SnapshotError;

    fn try_from(value: ActiveSnapshot) -> Result<Self, Self::Error> {
        let rotation = Rotation::from_index(value.rotation)
            .ok_or(SnapshotError::InvalidRotation(value.rotation))?;
        // `Piece::cells` adds offsets in `i8`; bound the origin first.
        let xs = -ORIGIN_MARGIN..=BOARD_WIDTH as i8 + ORIGIN_MARGIN;
        let ys = -ORIGIN_MARGIN..=BOARD_HEIGHT as i8 + ORIGIN_MARGIN;
        if !xs.contains(&value.x) || !ys.contains(&value.y) {
            return Err(SnapshotError::OutOfRange {
                x: value.x,
                y: value.y,
            });
        }
        Ok(Piece {
            shape: value.shape,
            rotation,
            x: value.x,
            y: value.y,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Cell codes, one `Vec` per row, top row first
    pub board: Vec<Vec<u8>>,
    pub current: ActiveSnapshot,
    pub next: Shape,
    pub score: u32,
}
