//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used by the simulation
//! core, the terminal front end and the persistence layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21)
//! - **Hidden rows**: rows 0 and 1 form the spawn buffer above the visible field
//! - **Spawn position**: (5, 1), i.e. `BOARD_WIDTH / 2` on `SPAWN_ROW`
//!
//! # Scoring
//!
//! | Lines cleared in one lock | Points |
//! |---------------------------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 or more | 800 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = Shape::from_code(3).unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(shape.code(), 3);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert!(!GameAction::Pause.is_gameplay());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows, including the hidden spawn buffer)
pub const BOARD_HEIGHT: u8 = 22;

/// Rows above the visible field used for spawning and game-over detection
pub const HIDDEN_ROWS: u8 = 2;

/// Number of rows a renderer should show (rows `HIDDEN_ROWS..BOARD_HEIGHT`)
pub const VISIBLE_HEIGHT: u8 = BOARD_HEIGHT - HIDDEN_ROWS;

/// Row on which new pieces are spawned
pub const SPAWN_ROW: i8 = 1;

/// Column on which new pieces are spawned
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Default interval between gravity ticks in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// Number of entries kept on the leaderboard
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Line clear scoring table, indexed by the number of rows cleared in one lock.
///
/// Clears of more than 4 rows use the last entry.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino shapes
///
/// The declaration order is significant: [`Shape::index`] is the position in
/// [`Shape::ALL`], and the board cell code of a locked shape is `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// Every shape in declaration order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Ordinal of the shape (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Board cell code for this shape (1..=7, 0 is reserved for empty)
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Shape::code`]. Returns `None` for 0 and for codes above 7.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation states, in clockwise order
///
/// The rotation index (`North` = 0 .. `West` = 3) selects one of the four
/// offset layouts of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (index + 1 mod 4)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (index - 1 mod 4)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation index in `0..4`
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rotation::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }
}

/// Lifecycle state of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    #[default]
    Running,
    Paused,
    /// Terminal until a new session is started
    GameOver,
}

/// Discrete commands pushed into a game session by an input source
///
/// Each variant maps to exactly one session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no score)
    SoftDrop,
    /// Drop piece to the lowest legal position and lock it
    HardDrop,
    /// Rotate piece clockwise
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Toggle between running and paused
    Pause,
    /// Start a new session (the only way out of game over)
    Restart,
}

impl GameAction {
    /// camelCase name, as used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action only makes sense while the session is running
    pub fn is_gameplay(self) -> bool {
        !matches!(self, GameAction::Pause | GameAction::Restart)
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Shape)`: locked by a piece of that shape
pub type Cell = Option<Shape>;

/// Integer code of a cell (0 = empty, 1..=7 = shape code)
pub fn cell_code(cell: Cell) -> u8 {
    cell.map_or(0, Shape::code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_geometry_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(VISIBLE_HEIGHT, 20);
        assert_eq!(SPAWN_X, 5);
        assert_eq!(SPAWN_ROW, 1);
    }

    #[test]
    fn shape_codes_roundtrip() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
            assert_eq!(shape.code(), i as u8 + 1);
            assert_eq!(Shape::from_code(shape.code()), Some(*shape));
        }
        assert_eq!(Shape::from_code(0), None);
        assert_eq!(Shape::from_code(8), None);
    }

    #[test]
    fn cell_code_maps_empty_to_zero() {
        assert_eq!(cell_code(None), 0);
        assert_eq!(cell_code(Some(Shape::I)), 1);
        assert_eq!(cell_code(Some(Shape::L)), 7);
    }

    #[test]
    fn rotation_index_is_clockwise_order() {
        let mut r = Rotation::North;
        for i in 0..8u8 {
            assert_eq!(r.index(), i % 4);
            assert_eq!(Rotation::from_index(i % 4), Some(r));
            r = r.rotate_cw();
        }
        assert_eq!(Rotation::from_index(4), None);
        assert_eq!(Rotation::South.rotate_cw().rotate_ccw(), Rotation::South);
    }

    #[test]
    fn action_names_are_camel_case_and_distinct() {
        let names: Vec<&str> = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Pause,
            GameAction::Restart,
        ]
        .into_iter()
        .map(GameAction::as_str)
        .collect();
        assert_eq!(names[0], "moveLeft");
        assert_eq!(names[5], "rotateCcw");
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
        assert!(!GameAction::Pause.is_gameplay());
        assert!(!GameAction::Restart.is_gameplay());
        assert!(GameAction::HardDrop.is_gameplay());
    }

    #[test]
    fn line_score_table() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }
}
