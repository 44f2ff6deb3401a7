//! Crunch CLI - single-stream file and directory archiver.
//!
//! Compresses a file or directory into one `.zst` or `.bz2` stream (the
//! codec is picked from the destination's extension; directories are packed
//! through tar first) and extracts such archives back to disk.

mod mode;
mod progress;

use clap::Parser;
use crunch_archive::paths::{archive_destination, extract_destination};
use crunch_archive::{Algorithm, ArchiveError, Result, compress, extract};
use mode::Mode;
use progress::TermProgress;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "crunch", version, about = "Single-stream archiver: zstd/bzip2, tar for directories")]
#[command(long_about = "
Compress a file or directory into a single compressed stream, or unpack such
an archive back to disk.

The algorithm follows the archive's extension: .zst -> zstd, .bz2 -> bzip2.
Directories are packed through tar in the same streaming pass.

Examples:
  crunch notes.txt                  # -> notes.txt.zst
  crunch logs/ logs.tar.bz2
  crunch backup.tar.zst             # unpacks into ./backup
  crunch report.txt.bz2 out/report.txt
  crunch -x suspicious.zst
")]
struct Cli {
    /// File or directory to compress, or archive (.zst/.bz2) to extract
    source: PathBuf,

    /// Target archive when compressing, output file/directory when
    /// extracting; derived from the source when omitted
    destination: Option<PathBuf>,

    /// Force extraction mode regardless of the filename heuristic
    #[arg(short = 'x', long)]
    extract: bool,

    /// Compression level (honored by zstd only)
    #[arg(long, value_name = "N")]
    level: Option<i32>,

    /// Print elapsed wall-clock time to stderr when done
    #[arg(short = 'b', long)]
    benchmark: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    let result = run(&cli);

    // Reported on success and failure alike.
    if cli.benchmark {
        eprintln!("Elapsed: {:.3}s", started.elapsed().as_secs_f64());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match mode::decide(&cli.source, cli.destination.as_deref(), cli.extract) {
        Mode::Compress => run_compress(cli),
        Mode::Extract => run_extract(cli),
    }
}

fn run_compress(cli: &Cli) -> Result<()> {
    let source = &cli.source;
    if !source.exists() {
        return Err(ArchiveError::source_not_found(source));
    }

    let destination = match &cli.destination {
        Some(destination) => destination.clone(),
        None => {
            let derived = archive_destination(source, source.is_dir(), Algorithm::Zstd);
            println!("No destination given, using {:?}", derived);
            derived
        }
    };
    let algorithm = Algorithm::from_path(&destination)?;

    let mut progress = TermProgress::new();
    if source.is_dir() {
        println!(
            "Packing directory {:?} -> tar -> {:?} ({})",
            source, destination, algorithm
        );
        compress::compress_dir(source, &destination, cli.level, &mut progress)?;
    } else {
        println!(
            "Compressing {:?} -> {:?} ({})",
            source, destination, algorithm
        );
        compress::compress_file(source, &destination, cli.level, &mut progress)?;
    }
    Ok(())
}

fn run_extract(cli: &Cli) -> Result<()> {
    let archive = &cli.source;
    if !archive.is_file() {
        return Err(ArchiveError::source_not_found(archive));
    }
    let algorithm = Algorithm::from_path(archive)?;

    let target = cli
        .destination
        .clone()
        .unwrap_or_else(|| extract_destination(archive));
    let staging = staging_dir(&target);
    std::fs::create_dir_all(&staging)?;

    println!(
        "Decompressing {:?} ({}) to a temporary file",
        archive, algorithm
    );
    let mut progress = TermProgress::new();
    let temp = extract::decompress_to_temp(archive, &staging, &mut progress)?;

    if extract::looks_like_tar(temp.path()) {
        println!("Tar container detected, unpacking into {:?}", target);
        extract::unpack_tar(temp, &target)?;
    } else {
        println!("Writing decompressed file to {:?}", target);
        extract::place_file(temp, &target)?;
    }
    Ok(())
}

/// Where the temporary file is staged: the target's parent, so the final
/// rename stays on one filesystem.
fn staging_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
