use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataGenError {
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataGenError {
    pub(crate) fn filesystem(path: &Path, source: io::Error) -> Self {
        DataGenError::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// `serde_json` reports failures of the underlying writer as its own error type,
    /// those still belong to the filesystem.
    pub(crate) fn from_json(path: &Path, err: serde_json::Error) -> Self {
        if err.is_io() {
            DataGenError::filesystem(path, io::Error::from(err))
        } else {
            DataGenError::Serialization(err)
        }
    }
}
