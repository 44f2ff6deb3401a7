//! Error types for archive operations.
//!
//! One error enum covers the whole pipeline: extension resolution, stream
//! I/O, and decompression failures. There are no retries anywhere; every
//! failure aborts the current operation and surfaces to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for all archive and extraction operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O error from the filesystem or an underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file name carries no recognized compression extension.
    #[error("cannot determine algorithm from {path:?}: expected a .zst or .bz2 suffix")]
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
    },

    /// The compression source or the archive to extract does not exist.
    #[error("source not found: {path:?}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The compressed stream could not be decoded.
    #[error("corrupt compressed stream in {path:?}: {source}")]
    CorruptStream {
        /// The archive being decompressed.
        path: PathBuf,
        /// The decoder error.
        source: io::Error,
    },
}

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

impl ArchiveError {
    /// Create an unsupported extension error.
    pub fn unsupported_extension(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedExtension { path: path.into() }
    }

    /// Create a source not found error.
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CorruptStream {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::unsupported_extension("data.rar");
        assert!(err.to_string().contains("data.rar"));
        assert!(err.to_string().contains(".zst"));

        let err = ArchiveError::source_not_found("missing.txt");
        assert!(err.to_string().contains("source not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
    }
}
