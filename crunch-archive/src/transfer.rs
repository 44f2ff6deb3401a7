//! Block-wise stream copying with progress accounting.

use crate::error::Result;
use std::io::{self, Read, Write};

/// Default transfer block size: 1 MiB.
///
/// Memory use of a transfer is bounded by one block regardless of stream
/// length, which is what keeps the tool usable on large archives. Tests
/// inject smaller sizes to exercise multi-block logic deterministically.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Receives progress updates from a running transfer.
///
/// `total` is `None` when the final size cannot be known up front, e.g.
/// while a directory is being packed into a tar stream.
pub trait ProgressSink {
    /// Called after every block with the running byte total.
    fn update(&mut self, processed: u64, total: Option<u64>, label: &str);

    /// Called once when the transfer completes.
    fn finish(&mut self) {}
}

/// A sink that discards all updates.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _processed: u64, _total: Option<u64>, _label: &str) {}
}

/// Copies bytes between streams in fixed-size blocks.
pub struct Transfer<'a> {
    block_size: usize,
    sink: &'a mut dyn ProgressSink,
}

impl<'a> Transfer<'a> {
    /// Create a transfer with the default block size.
    pub fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            sink,
        }
    }

    /// Override the block size.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Copy `reader` to `writer` until end-of-data, returning bytes moved.
    ///
    /// Each block is written out immediately; nothing beyond one block is
    /// ever buffered. One progress update is emitted per block, and the
    /// sink is finalized once the writer has been flushed. Read and write
    /// errors propagate unmodified; there are no retries.
    pub fn run<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        label: &str,
        expected: Option<u64>,
    ) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut block = vec![0u8; self.block_size];
        let mut transferred = 0u64;
        loop {
            let read = reader.read(&mut block)?;
            if read == 0 {
                break;
            }
            writer.write_all(&block[..read])?;
            transferred += read as u64;
            self.sink.update(transferred, expected, label);
        }
        writer.flush()?;
        self.sink.finish();
        Ok(transferred)
    }
}

/// A write-through decorator that counts bytes and reports progress.
///
/// Used where the producer drives the writes (tar packing) and the final
/// size is unknown, substituting for [`Transfer`]'s accounting role. Every
/// write is forwarded unchanged; the counter and the progress events are a
/// side channel.
pub struct CountingWriter<'a, W: Write> {
    inner: W,
    written: u64,
    label: &'a str,
    sink: &'a mut dyn ProgressSink,
}

impl<'a, W: Write> CountingWriter<'a, W> {
    /// Wrap `inner`, reporting to `sink` under `label`.
    pub fn new(inner: W, label: &'a str, sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            inner,
            written: 0,
            label,
            sink,
        }
    }

    /// Bytes forwarded so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Unwrap, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.written += written as u64;
        self.sink.update(self.written, None, self.label);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recording {
        updates: Vec<(u64, Option<u64>)>,
        finished: usize,
    }

    impl ProgressSink for Recording {
        fn update(&mut self, processed: u64, total: Option<u64>, _label: &str) {
            self.updates.push((processed, total));
        }

        fn finish(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn multi_block_transfer_accounts_every_byte() {
        let payload: Vec<u8> = (0u8..=99).collect();
        let mut source = Cursor::new(payload.clone());
        let mut dest = Vec::new();
        let mut sink = Recording::default();

        let moved = Transfer::new(&mut sink)
            .block_size(32)
            .run(&mut source, &mut dest, "copy", Some(100))
            .unwrap();

        assert_eq!(moved, 100);
        assert_eq!(dest, payload);
        assert_eq!(
            sink.updates,
            vec![
                (32, Some(100)),
                (64, Some(100)),
                (96, Some(100)),
                (100, Some(100)),
            ]
        );
        assert_eq!(sink.finished, 1);
    }

    #[test]
    fn empty_source_still_finalizes() {
        let mut source = Cursor::new(Vec::<u8>::new());
        let mut dest = Vec::new();
        let mut sink = Recording::default();

        let moved = Transfer::new(&mut sink)
            .run(&mut source, &mut dest, "copy", None)
            .unwrap();

        assert_eq!(moved, 0);
        assert!(dest.is_empty());
        assert!(sink.updates.is_empty());
        assert_eq!(sink.finished, 1);
    }

    #[test]
    fn counting_writer_forwards_and_counts() {
        let mut sink = Recording::default();
        let mut counting = CountingWriter::new(Vec::new(), "pack", &mut sink);

        counting.write_all(b"hello ").unwrap();
        counting.write_all(b"world").unwrap();
        assert_eq!(counting.bytes_written(), 11);

        let inner = counting.into_inner();
        assert_eq!(inner, b"hello world");
        assert_eq!(sink.updates.last(), Some(&(11, None)));
    }
}
