//! Compression algorithm selection.
//!
//! The algorithm is always derived from the compressed file's name: the
//! destination when compressing, the source when extracting. Content is
//! never sniffed here.

use crate::error::{ArchiveError, Result};
use std::fmt;
use std::path::Path;

/// A supported compression algorithm, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Zstandard (`.zst`).
    Zstd,
    /// Bzip2 (`.bz2`).
    Bzip2,
}

impl Algorithm {
    /// Resolve the algorithm from a path's trailing extension.
    ///
    /// Case-insensitive. Fails with [`ArchiveError::UnsupportedExtension`]
    /// for any other suffix, including none at all. Pure; performs no I/O.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy().to_ascii_lowercase();
        if name.ends_with(".zst") {
            Ok(Self::Zstd)
        } else if name.ends_with(".bz2") {
            Ok(Self::Bzip2)
        } else {
            Err(ArchiveError::unsupported_extension(path))
        }
    }

    /// The canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Zstd => "zst",
            Self::Bzip2 => "bz2",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zstd => write!(f, "zstd"),
            Self::Bzip2 => write!(f, "bz2"),
        }
    }
}
