//! Byte-counting, hashing progress sink for streamed downloads.
//!
//! Every chunk is forwarded to the underlying storage writer, fed into the
//! running digest, and reflected on a single console line that is repainted
//! in place (carriage return, no newline) so one line animates per transfer.

use sha2::Digest;
use std::io::{self, Write};

/// Blank-out width used to clear the previous progress line.
const CLEAR_WIDTH: usize = 40;

/// Write sink that tees every chunk into a digest accumulator while counting
/// bytes and animating a progress line against `expected_total`.
///
/// The expected total is a display hint only; a response may legitimately
/// deliver more or fewer bytes. One sink per download attempt, never reused.
pub struct ProgressWriter<W: Write, D: Digest> {
    inner: W,
    hasher: D,
    written: u64,
    expected: u64,
    /// Decimal digits in `expected`, for stable-width byte counts.
    pad_width: usize,
}

impl<W: Write, D: Digest> ProgressWriter<W, D> {
    /// Wrap `inner` with a fresh digest accumulator and zeroed counters.
    pub fn new(inner: W, expected_total: u64) -> Self {
        ProgressWriter {
            inner,
            hasher: D::new(),
            written: 0,
            expected: expected_total,
            pad_width: expected_total.to_string().len(),
        }
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    fn percent(&self) -> u64 {
        if self.expected == 0 {
            return 100;
        }
        (100.0 * self.written as f64 / self.expected as f64) as u64
    }

    fn repaint(&self) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\r{}", " ".repeat(CLEAR_WIDTH));
        let _ = write!(
            out,
            "\r{:3}% ({:>width$} of {}) complete",
            self.percent(),
            self.written,
            self.expected,
            width = self.pad_width,
        );
        let _ = out.flush();
    }

    /// Terminate the progress line and return the measured byte count and
    /// lowercase hex digest. Call only after the stream completed cleanly.
    pub fn finish(self) -> (u64, String) {
        println!();
        (self.written, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write, D: Digest> Write for ProgressWriter<W, D> {
    /// Forwards the whole chunk to storage, then hashes and counts it.
    /// Never partially accepts a chunk: if the inner write fails, neither
    /// the digest nor the counter observe any of it.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        self.hasher.update(buf);
        self.written += buf.len() as u64;
        self.repaint();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
