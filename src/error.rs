use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    // Filesystem access
    #[error("file not found")]
    NotFound(PathBuf),

    #[error("permission denied")]
    PermissionDenied(PathBuf),

    // Finder config
    #[error("invalid pattern")]
    InvalidPattern(String),

    // Traversal
    #[error("symlink loop")]
    SymlinkLoop(PathBuf),

    #[error("walk error")]
    Walk(String),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Classify a raw `io::Error` into the matching variant.
    ///
    /// Not-found and permission-denied get dedicated variants so callers can
    /// react without digging through `io::ErrorKind`; everything else stays
    /// a chained [`ProbeError::Io`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.into()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.into()),
            _ => Self::Io {
                path: path.into(),
                source,
            },
        }
    }
}
