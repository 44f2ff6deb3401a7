//! # Crunch Archive
//!
//! The archive/extract pipeline behind the `crunch` CLI.
//!
//! A source file or directory is compressed into a single stream, with the
//! codec chosen by the destination's extension (`.zst` or `.bz2`).
//! Directories are packed into a tar stream on the fly and compressed in the
//! same pass. Extraction runs the other way: decompress into a temporary
//! file, classify its content (tar container or plain file), then unpack or
//! rename it into place.
//!
//! ## Example
//!
//! ```rust,no_run
//! use crunch_archive::compress::compress_file;
//! use crunch_archive::NullProgress;
//! use std::path::Path;
//!
//! compress_file(
//!     Path::new("notes.txt"),
//!     Path::new("notes.txt.zst"),
//!     None,
//!     &mut NullProgress,
//! )
//! .unwrap();
//! ```
//!
//! Progress is reported through the [`ProgressSink`] trait; the library
//! itself never touches the terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod codec;
pub mod compress;
pub mod error;
pub mod extract;
pub mod paths;
pub mod transfer;

// Re-exports
pub use algorithm::Algorithm;
pub use codec::{CodecReader, CodecWriter};
pub use error::{ArchiveError, Result};
pub use transfer::{CountingWriter, DEFAULT_BLOCK_SIZE, NullProgress, ProgressSink, Transfer};
