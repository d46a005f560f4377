//! Pieces module - tetromino rotation tables and piece values
//!
//! Offsets are `(column, row)` relative to the piece origin, rows growing
//! downwards. Every shape has four rotation states of exactly four cells; the
//! tables are `const` and shared by the whole process.
//!
//! Rotation uses one small kick list for every shape and every transition
//! ([`WALL_KICKS`]). This is deliberately simpler than SRS.

use crate::types::{Rotation, Shape, SPAWN_ROW, SPAWN_X};

/// Offset of a single cell relative to piece origin
pub type CellOffset = (i8, i8);

/// One rotation state - 4 cell offsets from piece origin
pub type PieceShape = [CellOffset; 4];

/// Candidate origin shifts tried in order after a rotation
pub const WALL_KICKS: [CellOffset; 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

const I_STATES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(1, -1), (1, 0), (1, 1), (1, 2)],
    [(-1, 1), (0, 1), (1, 1), (2, 1)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const O_STATES: [PieceShape; 4] = [[(0, -1), (1, -1), (0, 0), (1, 0)]; 4];

const T_STATES: [PieceShape; 4] = [
    [(0, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (-1, 0), (0, 0), (0, 1)],
];

const S_STATES: [PieceShape; 4] = [
    [(0, -1), (1, -1), (-1, 0), (0, 0)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (-1, 1), (0, 1)],
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
];

const Z_STATES: [PieceShape; 4] = [
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    [(1, -1), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(0, -1), (-1, 0), (0, 0), (-1, 1)],
];

const J_STATES: [PieceShape; 4] = [
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (1, -1), (0, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (-1, 1), (0, 1)],
];

const L_STATES: [PieceShape; 4] = [
    [(1, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
];

/// All four rotation states of a shape, indexed by [`Rotation::index`]
pub fn rotation_states(shape: Shape) -> &'static [PieceShape; 4] {
    match shape {
        Shape::I => &I_STATES,
        Shape::O => &O_STATES,
        Shape::T => &T_STATES,
        Shape::S => &S_STATES,
        Shape::Z => &Z_STATES,
        Shape::J => &J_STATES,
        Shape::L => &L_STATES,
    }
}

/// Get the cell offsets for a shape and rotation
pub fn get_shape(shape: Shape, rotation: Rotation) -> PieceShape {
    rotation_states(shape)[rotation.index() as usize]
}

/// A positioned, rotated instance of a shape
///
/// Pieces are plain values: moving or rotating produces a new piece and the
/// caller decides whether to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its spawn orientation at `(x, y)`
    pub fn new(shape: Shape, x: i8, y: i8) -> Self {
        Self {
            shape,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Create a piece at the spawn position
    pub fn spawn(shape: Shape) -> Self {
        Self::new(shape, SPAWN_X, SPAWN_ROW)
    }

    /// Offsets of the current rotation state
    pub fn offsets(&self) -> PieceShape {
        get_shape(self.shape, self.rotation)
    }

    /// Absolute board coordinates of the 4 cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same piece with the origin shifted by `(dx, dy)`
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece turned one step, origin unchanged. No placement check.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..*self }
    }
}

/// Try to rotate a piece with the simple wall kick
///
/// Rotates once, then shifts the rotated piece by each entry of [`WALL_KICKS`]
/// in order and returns the first candidate accepted by `can_place`. Returns
/// `None` when every candidate is rejected.
pub fn try_rotate(
    piece: Piece,
    clockwise: bool,
    can_place: impl Fn(&Piece) -> bool,
) -> Option<Piece> {
    let rotated = piece.rotated(clockwise);
    WALL_KICKS
        .iter()
        .map(|&(dx, dy)| rotated.moved(dx, dy))
        .find(|candidate| can_place(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_state_has_four_distinct_cells() {
        for shape in Shape::ALL {
            for rotation in ROTATIONS {
                let offsets = get_shape(shape, rotation);
                let unique: HashSet<_> = offsets.iter().collect();
                assert_eq!(unique.len(), 4, "{:?} {:?}", shape, rotation);
            }
        }
    }

    #[test]
    fn spawn_uses_board_center() {
        let piece = Piece::spawn(Shape::T);
        assert_eq!((piece.x, piece.y), (5, 1));
        assert_eq!(piece.rotation, Rotation::North);
    }

    #[test]
    fn spawned_pieces_stay_in_hidden_rows() {
        for shape in Shape::ALL {
            for (_, y) in Piece::spawn(shape).cells() {
                assert!((0..=1).contains(&y), "{:?} spawns at row {}", shape, y);
            }
        }
    }

    #[test]
    fn cells_add_origin() {
        let piece = Piece::new(Shape::O, 5, 1);
        assert_eq!(piece.cells(), [(5, 0), (6, 0), (5, 1), (6, 1)]);
    }

    #[test]
    fn moved_keeps_rotation() {
        let piece = Piece::new(Shape::J, 4, 4).rotated(true);
        let moved = piece.moved(-2, 3);
        assert_eq!((moved.x, moved.y), (2, 7));
        assert_eq!(moved.rotation, Rotation::East);
        // Original value is untouched.
        assert_eq!((piece.x, piece.y), (4, 4));
    }

    #[test]
    fn rotated_wraps_both_ways() {
        let piece = Piece::new(Shape::L, 3, 3);
        assert_eq!(piece.rotated(false).rotation, Rotation::West);
        let full_turn = piece
            .rotated(true)
            .rotated(true)
            .rotated(true)
            .rotated(true);
        assert_eq!(full_turn, piece);
    }

    #[test]
    fn try_rotate_prefers_unshifted_candidate() {
        let piece = Piece::new(Shape::T, 4, 4);
        let rotated = try_rotate(piece, true, |_| true).unwrap();
        assert_eq!((rotated.x, rotated.y), (4, 4));
        assert_eq!(rotated.rotation, Rotation::East);
    }

    #[test]
    fn try_rotate_walks_kicks_in_order() {
        let piece = Piece::new(Shape::T, 4, 4);
        // Only accept the right shift; the left shift must have been tried first.
        let tried = std::cell::RefCell::new(Vec::new());
        let rotated = try_rotate(piece, true, |p| {
            tried.borrow_mut().push((p.x, p.y));
            p.x == 5
        })
        .unwrap();
        assert_eq!((rotated.x, rotated.y), (5, 4));
        assert_eq!(tried.into_inner(), vec![(4, 4), (3, 4), (5, 4)]);
    }

    #[test]
    fn try_rotate_rejects_when_no_kick_fits() {
        let piece = Piece::new(Shape::S, 4, 4);
        assert!(try_rotate(piece, false, |_| false).is_none());
    }
}
