//! Send-all and frame transmission over an abstract byte stream.
//!
//! # Partial writes (for beginners)
//!
//! A stream socket is allowed to accept only part of a buffer per call: asking
//! it to send 10 000 bytes may return "I took 4 096".  Code that ignores the
//! returned count silently drops the tail.  [`send_all`] loops, always
//! resuming from the first unsent byte, until the whole buffer is accepted or
//! the transport fails.
//!
//! # The "more" hint
//!
//! On Linux the socket layer can be told that more data for the same logical
//! message is about to follow (`MSG_MORE`), so the kernel may coalesce the tag,
//! argument and terminator into one packet.  [`send_frame`] passes
//! `more = true` for the tag and argument and `more = false` for the
//! terminator, which flushes the frame.

pub mod mock;

use std::io;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::protocol::frame::{Frame, FRAME_TERMINATOR};

/// A connected byte sink that may accept fewer bytes than offered.
///
/// Implemented for TCP sockets in the client crate and by
/// [`mock::ChunkedTransport`] for tests.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Transmits a prefix of `buf` and returns how many bytes were accepted.
    ///
    /// `more` tells the transport that further bytes of the same frame follow
    /// immediately.  Transports without such a facility ignore it.
    fn send(&mut self, buf: &[u8], more: bool) -> io::Result<usize>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, buf: &[u8], more: bool) -> io::Result<usize> {
        (**self).send(buf, more)
    }
}

/// Result of [`send_all`]: how much was sent, and whether it stopped on an error.
///
/// Both fields matter.  A transport can fail after some bytes were already
/// accepted, in which case `sent` is non-zero *and* `error` is set.
#[derive(Debug)]
pub struct SendOutcome {
    /// Bytes accepted by the transport before returning.
    pub sent: usize,
    /// The error that stopped transmission, if any.
    pub error: Option<io::Error>,
}

impl SendOutcome {
    /// Returns `true` if `expected` bytes were sent without error.
    pub fn is_complete(&self, expected: usize) -> bool {
        self.error.is_none() && self.sent == expected
    }
}

/// A frame could not be fully transmitted.
#[derive(Debug, Error)]
#[error("can't {action}: {source}")]
pub struct SendError {
    /// What the frame was meant to do (`"set name"`, `"send message"`, ...).
    pub action: &'static str,
    /// Frame bytes accepted before the failure.
    pub sent: usize,
    /// Full encoded size of the frame.
    pub expected: usize,
    #[source]
    pub source: io::Error,
}

/// Sends the whole of `buf`, resuming after partial writes.
///
/// Interrupted calls are retried immediately.  A transport that reports zero
/// bytes accepted for a non-empty buffer is treated as a
/// [`io::ErrorKind::WriteZero`] failure.
///
/// # Examples
///
/// ```rust
/// use nulchat_core::transport::{mock::ChunkedTransport, send_all};
///
/// let mut transport = ChunkedTransport::new(3);
/// let outcome = send_all(&mut transport, b"hello world", true);
/// assert!(outcome.is_complete(11));
/// assert_eq!(transport.bytes(), b"hello world");
/// ```
pub fn send_all<T: Transport + ?Sized>(transport: &mut T, buf: &[u8], more: bool) -> SendOutcome {
    let mut sent = 0;
    while sent < buf.len() {
        match transport.send(&buf[sent..], more) {
            Ok(0) => {
                return SendOutcome {
                    sent,
                    error: Some(io::Error::from(io::ErrorKind::WriteZero)),
                };
            }
            Ok(n) => {
                sent += n;
                trace!(chunk = n, sent, total = buf.len(), "partial write");
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return SendOutcome { sent, error: Some(e) },
        }
    }
    SendOutcome { sent, error: None }
}

/// Sends one complete frame: tag byte, argument, NUL terminator.
///
/// The tag and argument go out with `more = true`; the terminator is a
/// separate final write with `more = false`.
///
/// # Errors
///
/// Returns [`SendError`] naming the frame's action if any of the three writes
/// fails or comes up short.
pub fn send_frame<T: Transport + ?Sized>(transport: &mut T, frame: &Frame) -> Result<(), SendError> {
    let action = frame.tag.action();
    let expected = frame.encoded_len();
    debug!(tag = ?frame.tag, len = frame.argument.len(), "sending frame");
    if !frame.is_well_formed() {
        warn!(tag = ?frame.tag, "argument contains a NUL byte; the receiver will cut the frame short");
    }

    let tag = [frame.tag.as_byte()];
    let terminator = [FRAME_TERMINATOR];
    let parts: [(&[u8], bool); 3] = [
        (&tag[..], true),
        (frame.argument.as_slice(), true),
        (&terminator[..], false),
    ];

    let mut sent = 0;
    for (part, more) in parts {
        let outcome = send_all(transport, part, more);
        sent += outcome.sent;
        if !outcome.is_complete(part.len()) {
            let source = outcome
                .error
                .unwrap_or_else(|| io::Error::from(io::ErrorKind::WriteZero));
            return Err(SendError {
                action,
                sent,
                expected,
                source,
            });
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
