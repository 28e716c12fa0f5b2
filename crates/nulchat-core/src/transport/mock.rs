//! In-memory transport for tests.
//!
//! # Why a chunked transport?
//!
//! Real sockets rarely split a 7-byte frame, so the partial-write path of
//! [`send_all`](super::send_all) is hard to hit against the network.
//! `ChunkedTransport` accepts at most `chunk` bytes per call, which forces
//! every multi-byte write through the resume loop, and records each call so
//! tests can check the "more" hint on every write.
//!
//! # Usage in tests
//!
//! ```
//! use nulchat_core::{send_frame, Frame, Tag};
//! use nulchat_core::transport::mock::ChunkedTransport;
//!
//! let mut transport = ChunkedTransport::new(1);
//! send_frame(&mut transport, &Frame::new(Tag::Tag, "dev")).unwrap();
//!
//! assert_eq!(transport.bytes(), b"Tdev\0");
//! assert_eq!(transport.writes().len(), 5);
//! ```
//!
//! # Failure injection
//!
//! [`ChunkedTransport::failing_after`] makes the transport return
//! `BrokenPipe` once a byte budget is used up, to exercise error paths.

use std::io;

use super::Transport;

/// One recorded call to [`Transport::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    /// Bytes accepted by this call.
    pub data: Vec<u8>,
    /// The "more data follows" hint passed with the call.
    pub more: bool,
}

/// A transport that accepts at most `chunk` bytes per call and records every write.
#[derive(Debug, Default)]
pub struct ChunkedTransport {
    chunk: usize,
    budget: Option<usize>,
    writes: Vec<RecordedWrite>,
}

impl ChunkedTransport {
    /// Creates a transport that accepts up to `chunk` bytes per call.
    ///
    /// A `chunk` of 0 is treated as 1.
    pub fn new(chunk: usize) -> Self {
        Self {
            chunk: chunk.max(1),
            budget: None,
            writes: Vec::new(),
        }
    }

    /// Creates a transport that fails with `BrokenPipe` once `budget` bytes
    /// have been accepted.
    pub fn failing_after(chunk: usize, budget: usize) -> Self {
        Self {
            budget: Some(budget),
            ..Self::new(chunk)
        }
    }

    /// Every call made so far, in order.
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    /// All accepted bytes concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.iter().flat_map(|w| w.data.iter().copied()).collect()
    }
}

impl Transport for ChunkedTransport {
    fn send(&mut self, buf: &[u8], more: bool) -> io::Result<usize> {
        let mut n = buf.len().min(self.chunk);
        if let Some(budget) = self.budget.as_mut() {
            if *budget == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            n = n.min(*budget);
            *budget -= n;
        }
        self.writes.push(RecordedWrite {
            data: buf[..n].to_vec(),
            more,
        });
        Ok(n)
    }
}
