//! Archive building: single-file compression and directory tar packing.

use crate::algorithm::Algorithm;
use crate::codec::CodecWriter;
use crate::error::{ArchiveError, Result};
use crate::paths;
use crate::transfer::{CountingWriter, ProgressSink, Transfer};
use std::fs::File;
use std::io;
use std::path::Path;

/// Compress a single file into `destination`.
///
/// The algorithm comes from the destination's extension, resolved before
/// any I/O happens. The source length is known up front, so the sink is
/// fed a total and progress can show a percentage. Returns the number of
/// bytes read from the source.
pub fn compress_file(
    source: &Path,
    destination: &Path,
    level: Option<i32>,
    sink: &mut dyn ProgressSink,
) -> Result<u64> {
    let algorithm = Algorithm::from_path(destination)?;
    let mut reader = File::open(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArchiveError::source_not_found(source),
        _ => ArchiveError::Io(e),
    })?;
    let expected = reader.metadata()?.len();
    let mut writer = CodecWriter::create(destination, algorithm, level)?;
    let moved = Transfer::new(sink).run(&mut reader, &mut writer, "compress", Some(expected))?;
    writer.finish()?;
    Ok(moved)
}

/// Pack a directory into a tar stream and compress it into `destination`.
///
/// The tree is streamed in a single pass; no intermediate tar file ever
/// touches the disk. The tar size cannot be predicted, so progress reports
/// an unknown total through a [`CountingWriter`] wrapped around the codec
/// stream. Entry names are rooted at the directory's own base name, and an
/// empty directory yields a valid tar holding just its root entry.
///
/// Returns the number of tar bytes produced (pre-compression).
pub fn compress_dir(
    source: &Path,
    destination: &Path,
    level: Option<i32>,
    sink: &mut dyn ProgressSink,
) -> Result<u64> {
    let algorithm = Algorithm::from_path(destination)?;
    if !source.is_dir() {
        return Err(ArchiveError::source_not_found(source));
    }
    let root = paths::base_name(source)?;

    let writer = CodecWriter::create(destination, algorithm, level)?;
    let counting = CountingWriter::new(writer, "tar+compress", &mut *sink);
    let mut builder = tar::Builder::new(counting);
    builder.append_dir_all(&root, source)?;

    // into_inner writes the tar trailer blocks.
    let counting = builder.into_inner()?;
    let written = counting.bytes_written();
    counting.into_inner().finish()?;
    sink.finish();
    Ok(written)
}
