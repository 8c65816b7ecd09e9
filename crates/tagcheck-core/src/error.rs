//! Error type for the checker.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Everything that can abort a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A path that was expected to exist is missing.
    #[error("{} does not exist", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Reading a local file failed.
    #[error("failed to read '{}'", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The checks file is not a JSON array of strings.
    #[error("'{}' is not a JSON array of selector strings", path.display())]
    Parse {
        /// The checks file.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },

    /// Fetching a remote document failed.
    #[error("failed to fetch '{url}'")]
    Network {
        /// The requested URL.
        url: String,
        /// Underlying transport failure.
        source: reqwest::Error,
    },

    /// A selector could not be parsed.
    #[error("invalid selector '{selector}': {message}")]
    Selector {
        /// The selector as written in the checks file.
        selector: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl CheckError {
    /// Classify an I/O failure on `path`, keeping a vanished file distinct.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
