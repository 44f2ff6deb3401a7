//! Archive unpacking: decompress to a temporary file, classify, place.
//!
//! Extraction is a two-phase state machine. Phase one drains the codec
//! stream into a fresh temporary file. Phase two looks at the temporary
//! file's *content* (never its name) to decide whether it is a tar
//! container, then either unpacks it into a directory or renames it into
//! its final place. Each phase runs to completion before the next starts.

use crate::algorithm::Algorithm;
use crate::codec::CodecReader;
use crate::error::{ArchiveError, Result};
use crate::transfer::{ProgressSink, Transfer};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Decompress `archive` into a fresh temporary file under `staging_dir`.
///
/// The progress total is the *compressed* archive's size: the decompressed
/// size is unknown up front, so the percentage tracks output produced
/// against input consumed. An accepted approximation, kept deliberately.
///
/// `staging_dir` should be the final target's parent so the later rename
/// never crosses a filesystem boundary. The temporary file is deleted when
/// the returned handle drops; callers consume it via [`unpack_tar`] or
/// [`place_file`], so a failure between the phases cannot leak it.
pub fn decompress_to_temp(
    archive: &Path,
    staging_dir: &Path,
    sink: &mut dyn ProgressSink,
) -> Result<NamedTempFile> {
    let algorithm = Algorithm::from_path(archive)?;
    let expected = fs::metadata(archive)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ArchiveError::source_not_found(archive),
            _ => ArchiveError::Io(e),
        })?
        .len();

    let mut temp = NamedTempFile::new_in(staging_dir)?;
    let mut reader = CodecReader::open(archive, algorithm)?;
    Transfer::new(sink)
        .run(&mut reader, temp.as_file_mut(), "decompress", Some(expected))
        .map_err(|e| match e {
            ArchiveError::Io(source) if is_decode_failure(&source) => {
                ArchiveError::corrupt_stream(archive, source)
            }
            other => other,
        })?;
    Ok(temp)
}

/// Whether the bytes at `path` parse as a tar container.
///
/// A pure predicate over content, and it never raises: short files, zero
/// blocks and plain data all degrade to "not a tar". Only the first header
/// is checked; corruption deeper in the stream still surfaces during the
/// actual unpacking, just later.
pub fn looks_like_tar(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut archive = tar::Archive::new(file);
    match archive.entries() {
        Ok(mut entries) => matches!(entries.next(), Some(Ok(_))),
        Err(_) => false,
    }
}

/// Unpack the tar container held in `temp` into `dest_dir`.
///
/// The directory (and any missing parents) is created first. Consumes and
/// deletes the temporary file.
pub fn unpack_tar(temp: NamedTempFile, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)?;
    let mut archive = tar::Archive::new(File::open(temp.path())?);
    archive.unpack(dest_dir)?;
    temp.close()?;
    Ok(())
}

/// Move the plain decompressed file in `temp` to its final `dest`.
///
/// The parent directory is created first. The rename consumes the
/// temporary file; there is no separate delete step.
pub fn place_file(temp: NamedTempFile, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    temp.persist(dest).map_err(|e| ArchiveError::Io(e.error))?;
    Ok(())
}

/// Codec decode failures arrive as I/O errors; these kinds are the ones
/// the zstd and bzip2 streams report for malformed input.
fn is_decode_failure(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::Other
    )
}
