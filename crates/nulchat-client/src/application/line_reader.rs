//! Bounded line reading from an input stream.
//!
//! Lines are read into a growable buffer, but never past `max_len` bytes
//! (trailing newline included).  A line that does not reach its newline
//! within that limit is rejected rather than silently split.

use std::io::{self, BufRead, Read};

use thiserror::Error;

/// An input line could not be accepted.
#[derive(Debug, Error)]
pub enum LineError {
    /// No newline within `max` bytes.
    #[error("input line too long or unexpected terminator (longer than {max} bytes)")]
    TooLong { max: usize },

    /// Input ended in the middle of a line.
    #[error("input line too long or unexpected terminator (no newline before end of input)")]
    Unterminated,

    /// The line contains a NUL byte, which would end the frame early.
    #[error("input line too long or unexpected terminator (embedded NUL byte)")]
    EmbeddedNul,

    /// The underlying read failed.
    #[error("can't read from stdin: {0}")]
    Read(#[source] io::Error),
}

/// Reads newline-terminated lines of at most `max_len` bytes.
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader`.  A `max_len` of 0 is treated as 1.
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len: max_len.max(1),
            buf: Vec::new(),
        }
    }

    /// Maximum accepted line length, newline included.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Reads the next line with its trailing `\n` stripped.
    ///
    /// Returns `Ok(None)` at a clean end of input (nothing buffered).
    ///
    /// # Errors
    ///
    /// - [`LineError::TooLong`] if no newline appears within `max_len` bytes.
    /// - [`LineError::Unterminated`] if input ends after a partial line.
    /// - [`LineError::EmbeddedNul`] if the line contains a NUL byte.
    /// - [`LineError::Read`] if the reader fails.
    pub fn read_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        self.buf.clear();
        let n = self
            .reader
            .by_ref()
            .take(self.max_len as u64)
            .read_until(b'\n', &mut self.buf)
            .map_err(LineError::Read)?;

        if n == 0 {
            return Ok(None);
        }
        if self.buf.last() != Some(&b'\n') {
            return Err(if n >= self.max_len {
                LineError::TooLong { max: self.max_len }
            } else {
                LineError::Unterminated
            });
        }
        self.buf.pop();
        if self.buf.contains(&0) {
            return Err(LineError::EmbeddedNul);
        }
        Ok(Some(&self.buf))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
