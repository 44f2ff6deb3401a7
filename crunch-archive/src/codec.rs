//! Uniform streaming interface over the supported codecs.
//!
//! The rest of the pipeline only ever sees [`CodecReader`] and
//! [`CodecWriter`]; which codec sits behind them is decided once, from the
//! [`Algorithm`], when the stream is opened.

use crate::algorithm::Algorithm;
use crate::error::{ArchiveError, Result};
use bzip2::Compression;
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use zstd::stream::read::Decoder as ZstdDecoder;
use zstd::stream::write::Encoder as ZstdEncoder;

/// A readable stream of decompressed bytes from a compressed file.
pub enum CodecReader {
    /// Zstandard decoder.
    Zstd(ZstdDecoder<'static, BufReader<File>>),
    /// Bzip2 decoder.
    Bzip2(BzDecoder<File>),
}

impl CodecReader {
    /// Open `path` for decompression with the given algorithm.
    ///
    /// A missing file maps to [`ArchiveError::SourceNotFound`]; decoding
    /// errors surface later, on the first failing read.
    pub fn open(path: &Path, algorithm: Algorithm) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ArchiveError::source_not_found(path),
            _ => ArchiveError::Io(e),
        })?;
        match algorithm {
            Algorithm::Zstd => Ok(Self::Zstd(ZstdDecoder::new(file)?)),
            Algorithm::Bzip2 => Ok(Self::Bzip2(BzDecoder::new(file))),
        }
    }
}

impl std::fmt::Debug for CodecReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zstd(_) => f.write_str("CodecReader::Zstd"),
            Self::Bzip2(_) => f.write_str("CodecReader::Bzip2"),
        }
    }
}

impl Read for CodecReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Zstd(reader) => reader.read(buf),
            Self::Bzip2(reader) => reader.read(buf),
        }
    }
}

/// A writable stream that compresses into a file.
pub enum CodecWriter {
    /// Zstandard encoder.
    Zstd(ZstdEncoder<'static, File>),
    /// Bzip2 encoder.
    Bzip2(BzEncoder<File>),
}

impl CodecWriter {
    /// Create `path` for compression with the given algorithm.
    ///
    /// The level is forwarded to zstd (codec default when absent). Bzip2
    /// takes no caller-facing level; a supplied one is ignored rather than
    /// rejected, so one invocation shape works against either extension.
    pub fn create(path: &Path, algorithm: Algorithm, level: Option<i32>) -> Result<Self> {
        let file = File::create(path)?;
        match algorithm {
            // Level 0 means "use the zstd default" (currently 3).
            Algorithm::Zstd => Ok(Self::Zstd(ZstdEncoder::new(file, level.unwrap_or(0))?)),
            Algorithm::Bzip2 => Ok(Self::Bzip2(BzEncoder::new(file, Compression::default()))),
        }
    }

    /// Write the codec trailer and close the underlying file.
    ///
    /// Must be called on the success path. Dropping without finishing still
    /// releases the file handle but may leave a truncated stream behind.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Zstd(writer) => {
                writer.finish()?;
            }
            Self::Bzip2(writer) => {
                writer.finish()?;
            }
        }
        Ok(())
    }
}

impl Write for CodecWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Zstd(writer) => writer.write(buf),
            Self::Bzip2(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Zstd(writer) => writer.flush(),
            Self::Bzip2(writer) => writer.flush(),
        }
    }
}
