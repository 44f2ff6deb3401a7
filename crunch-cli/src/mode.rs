//! Compress-vs-extract mode decision.

use crunch_archive::Algorithm;
use std::path::Path;

/// The operation an invocation resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Build an archive from the source.
    Compress,
    /// Unpack the source archive.
    Extract,
}

/// Decide the mode from the paths and the explicit flag.
///
/// In order: the `-x` flag forces extraction; otherwise a source that
/// exists as a regular file with a compression extension means extraction,
/// unless the destination also carries one (a re-compression style
/// invocation); everything else compresses.
///
/// This is a heuristic over names and flags only. A file that merely
/// *looks* like an archive still goes down the extract path and surfaces a
/// decode error there.
pub fn decide(source: &Path, destination: Option<&Path>, extract_flag: bool) -> Mode {
    if extract_flag {
        return Mode::Extract;
    }
    if source.is_file() && has_compression_extension(source) {
        if destination.is_some_and(has_compression_extension) {
            return Mode::Compress;
        }
        return Mode::Extract;
    }
    Mode::Compress
}

fn has_compression_extension(path: &Path) -> bool {
    Algorithm::from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn archive_named_source_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("x.zst");
        fs::write(&archive, b"stub").unwrap();

        assert_eq!(decide(&archive, None, false), Mode::Extract);
    }

    #[test]
    fn archive_to_archive_recompresses() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("x.zst");
        fs::write(&archive, b"stub").unwrap();

        let dest = dir.path().join("y.zst");
        assert_eq!(decide(&archive, Some(&dest), false), Mode::Compress);
        let dest = dir.path().join("y.bz2");
        assert_eq!(decide(&archive, Some(&dest), false), Mode::Compress);
    }

    #[test]
    fn archive_to_plain_destination_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("x.bz2");
        fs::write(&archive, b"stub").unwrap();

        let dest = dir.path().join("out.txt");
        assert_eq!(decide(&archive, Some(&dest), false), Mode::Extract);
    }

    #[test]
    fn plain_source_compresses() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        fs::write(&plain, b"stub").unwrap();

        assert_eq!(decide(&plain, None, false), Mode::Compress);
    }

    #[test]
    fn nonexistent_archive_name_still_compresses() {
        // The heuristic requires the source to exist as a regular file.
        assert_eq!(decide(Path::new("ghost.zst"), None, false), Mode::Compress);
    }

    #[test]
    fn directory_named_like_archive_compresses() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("weird.zst");
        fs::create_dir(&odd).unwrap();

        assert_eq!(decide(&odd, None, false), Mode::Compress);
    }

    #[test]
    fn explicit_flag_always_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("x.zst");
        fs::write(&archive, b"stub").unwrap();

        assert_eq!(decide(&archive, None, true), Mode::Extract);
        assert_eq!(decide(Path::new("plain.txt"), None, true), Mode::Extract);
        let dest = dir.path().join("y.zst");
        assert_eq!(decide(&archive, Some(&dest), true), Mode::Extract);
    }
}
