//! Default output-path derivation.
//!
//! Every derivation here is content-blind: only path names are consumed, so
//! the results are computable before any compression or decompression
//! starts. That matters for extraction, where the target (and hence the
//! staging directory for the temporary file) must be known up front.

use crate::algorithm::Algorithm;
use crate::error::Result;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Compression suffixes recognized when deriving an extraction target, in
/// precedence order. At most one is stripped.
const COMPRESSION_SUFFIXES: [&str; 2] = [".zst", ".bz2"];

/// Default archive name for `source`: its base name, `.tar` when the source
/// is a directory, plus the algorithm's canonical extension.
///
/// Returns a bare file name, relative to the working directory. A trailing
/// path separator on `source` is harmless (`Path::file_name` normalizes it
/// away).
pub fn archive_destination(source: &Path, is_dir: bool, algorithm: Algorithm) -> PathBuf {
    let mut name = source
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("archive"));
    if is_dir {
        name.push(".tar");
    }
    name.push(".");
    name.push(algorithm.extension());
    PathBuf::from(name)
}

/// Default extraction target for `archive`: its base name with at most one
/// trailing compression suffix stripped, then a trailing `.tar` stripped,
/// joined with the archive's own parent directory.
///
/// If stripping would empty the name (an archive literally called `.zst`),
/// the unstripped base name is kept so the target is never empty.
pub fn extract_destination(archive: &Path) -> PathBuf {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut stem = name.as_str();
    for suffix in COMPRESSION_SUFFIXES {
        if let Some(stripped) = strip_suffix_ci(stem, suffix) {
            stem = stripped;
            break;
        }
    }
    if let Some(stripped) = strip_suffix_ci(stem, ".tar") {
        stem = stripped;
    }
    if stem.is_empty() {
        stem = name.as_str();
    }
    match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(stem),
        _ => PathBuf::from(stem),
    }
}

/// The base name of `path`, tolerating trailing separators.
///
/// `.` and `..` carry no file name of their own; those are resolved through
/// the filesystem first.
pub(crate) fn base_name(path: &Path) -> Result<OsString> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_os_string());
    }
    let canonical = path.canonicalize()?;
    canonical
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no base name for {path:?}"),
            )
            .into()
        })
}

fn strip_suffix_ci<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(suffix) {
        Some(&name[..split])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_destination_for_files() {
        assert_eq!(
            archive_destination(Path::new("notes.txt"), false, Algorithm::Zstd),
            PathBuf::from("notes.txt.zst")
        );
        assert_eq!(
            archive_destination(Path::new("some/dir/notes.txt"), false, Algorithm::Bzip2),
            PathBuf::from("notes.txt.bz2")
        );
    }

    #[test]
    fn compress_destination_for_directories() {
        assert_eq!(
            archive_destination(Path::new("logs"), true, Algorithm::Zstd),
            PathBuf::from("logs.tar.zst")
        );
        // Trailing separator still yields the right base name.
        assert_eq!(
            archive_destination(Path::new("logs/"), true, Algorithm::Zstd),
            PathBuf::from("logs.tar.zst")
        );
    }

    #[test]
    fn extract_destination_strips_suffixes() {
        assert_eq!(
            extract_destination(Path::new("a/data.bz2")),
            PathBuf::from("a/data")
        );
        assert_eq!(
            extract_destination(Path::new("a/b/report.tar.zst")),
            PathBuf::from("a/b/report")
        );
        assert_eq!(
            extract_destination(Path::new("plain.zst")),
            PathBuf::from("plain")
        );
    }

    #[test]
    fn extract_destination_strips_at_most_one_compression_suffix() {
        assert_eq!(
            extract_destination(Path::new("odd.bz2.zst")),
            PathBuf::from("odd.bz2")
        );
    }

    #[test]
    fn extract_destination_is_case_insensitive() {
        assert_eq!(
            extract_destination(Path::new("SHOUT.TAR.ZST")),
            PathBuf::from("SHOUT")
        );
    }

    #[test]
    fn extract_destination_never_empties_the_name() {
        assert_eq!(extract_destination(Path::new(".zst")), PathBuf::from(".zst"));
    }

    #[test]
    fn base_name_handles_trailing_separator() {
        assert_eq!(base_name(Path::new("some/dir/")).unwrap(), "dir");
        assert_eq!(base_name(Path::new("plain")).unwrap(), "plain");
    }
}
