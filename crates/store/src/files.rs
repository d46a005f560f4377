//! Save and leaderboard files in a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::codec;
use crate::core::{GameSession, Leaderboard, Snapshot};
use crate::error::StoreError;

const APP_DIR: &str = "blockfall";
const SAVE_FILE: &str = "save.json";
const SCORES_FILE: &str = "scores.json";

/// File locations for one player profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<platform data dir>/blockfall`, or `./blockfall` when the platform has none
    pub fn default_location() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.dir.join(SCORES_FILE)
    }

    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let text = codec::encode_snapshot(snapshot)?;
        let path = self.save_path();
        self.write(&path, &text)?;
        log::info!("saved game to {}", path.display());
        Ok(())
    }

    pub fn load_snapshot(&self) -> Result<Snapshot, StoreError> {
        let path = self.save_path();
        let text = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        codec::decode_snapshot(&text)
    }

    /// Load the saved game and rebuild a running session from it
    pub fn load_session<R: Rng>(&self, rng: R) -> Result<GameSession<R>, StoreError> {
        let snapshot = self.load_snapshot()?;
        let session = GameSession::from_snapshot(&snapshot, rng)?;
        log::info!("loaded game from {}", self.save_path().display());
        Ok(session)
    }

    /// Missing file means nobody has played yet: an empty board
    pub fn load_leaderboard(&self) -> Result<Leaderboard, StoreError> {
        let path = self.scores_path();
        match fs::read_to_string(&path) {
            Ok(text) => codec::decode_leaderboard(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no leaderboard at {}, starting empty", path.display());
                Ok(Leaderboard::new())
            }
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    pub fn save_leaderboard(&self, board: &Leaderboard) -> Result<(), StoreError> {
        let text = codec::encode_leaderboard(board)?;
        self.write(&self.scores_path(), &text)
    }

    /// Write through a temporary file so a crash never leaves half a file
    fn write(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::default_location()
    }
}
