//! File persistence for blockfall.
//!
//! Saved games and the leaderboard are stored as small JSON files (see
//! [`codec`] for the format). [`Store`] maps them onto a data directory,
//! by default `<data dir>/blockfall/`.

pub mod codec;
pub mod error;
pub mod files;

pub use blockfall_core as core;

pub use codec::{
    decode_leaderboard, decode_snapshot, encode_leaderboard, encode_snapshot, FORMAT_VERSION,
};
pub use error::StoreError;
pub use files::Store;
