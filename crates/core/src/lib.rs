//! Simulation core - pure, deterministic and testable
//!
//! This crate contains every game rule and nothing else. It performs no I/O,
//! owns no timer and draws nothing: a host pushes [`GameAction`]s and ticks into
//! a [`GameSession`], and pulls a [`Frame`] copy back out for rendering.
//!
//! - **Deterministic**: randomness is injected, so a seeded RNG replays a game
//! - **Single-threaded**: every mutator takes `&mut self`; hosts that share a
//!   session across threads must serialize access themselves
//! - **Cheap**: every operation is O(board size) and never blocks
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid with collision test, lock and line clear
//! - [`pieces`]: rotation-state tables, [`Piece`] values and the wall-kick list
//! - [`rng`]: 7-bag shape queue over an injected random source
//! - [`scoring`]: line clear count to points
//! - [`game_state`]: the [`GameSession`] state machine
//! - [`frame`]: read-only per-frame copy for renderers
//! - [`snapshot`]: persistable session value and its validation
//! - [`leaderboard`]: top-10 score list and the record-once rule
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::types::{GameAction, Status};
//!
//! let mut game = GameSession::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! game.tick();
//!
//! assert_eq!(game.status(), Status::Running);
//! assert_eq!(game.score(), 0); // drops alone never score
//! ```

pub mod board;
pub mod frame;
pub mod game_state;
pub mod leaderboard;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use frame::{ActiveFrame, Frame};
pub use game_state::{GameSession, LockEvent};
pub use leaderboard::{Leaderboard, ScoreEntry, ScoreRecorder};
pub use pieces::{get_shape, try_rotate, Piece, WALL_KICKS};
pub use rng::PieceQueue;
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, Snapshot, SnapshotError};
