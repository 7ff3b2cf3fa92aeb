use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    /// Article directory or an article file could not be read, or the
    /// manifest could not be written.
    #[error("file system error at {path:?}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Only raised with `--strict`.
    #[error("invalid front matter in {path:?}: {reason}")]
    InvalidFrontMatter { path: PathBuf, reason: String },
}

impl ManifestError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, ManifestError>;
