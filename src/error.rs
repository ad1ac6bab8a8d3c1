use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied for {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed listing: {0}")]
    Parse(String),
}

impl Error {
    /// Classify an I/O failure on a named file.
    pub(crate) fn for_path(path: &Path, action: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Error::Io {
                context: format!("{} {}", action, path.display()),
                source,
            },
        }
    }

    /// Wrap an I/O failure on one of the standard streams.
    pub(crate) fn for_stream(stream: &str, action: &str, source: io::Error) -> Self {
        Error::Io {
            context: format!("{} {}", action, stream),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
