use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::SnapshotError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a {expected} file, found {found:?}")]
    UnexpectedKind { expected: &'static str, found: String },
    #[error("unsupported file version {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    InvalidSnapshot(#[from] SnapshotError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
