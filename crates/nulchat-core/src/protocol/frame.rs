//! Frame codec for the nulchat wire protocol.
//!
//! Wire format:
//! ```text
//! [tag:1][argument:N][0x00]
//! ```
//! There is no length field.  The frame ends at the first NUL byte after the
//! tag, so an argument containing NUL cannot be represented.  The encoder does
//! not escape or reject such arguments; producing them is the caller's bug.

use thiserror::Error;

/// Byte that terminates every frame on the wire.
pub const FRAME_TERMINATOR: u8 = 0x00;

/// Errors that can occur while decoding a frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// No terminator was found; more bytes are needed to complete the frame.
    #[error("incomplete frame: no terminator in {available} bytes")]
    Incomplete { available: usize },

    /// The leading byte is not one of the known tags.
    #[error("unknown frame tag: 0x{0:02X}")]
    UnknownTag(u8),
}

// ── Tags ──────────────────────────────────────────────────────────────────────

/// Command kind carried in the first byte of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Set the sender's display name.
    Name = b'N',
    /// Set the sender's tag.
    Tag = b'T',
    /// Chat message.
    Message = b'M',
}

impl Tag {
    /// Wire byte for this tag.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Human-readable description of what sending this frame does, used in
    /// error messages (`"can't set name"`).
    pub fn action(self) -> &'static str {
        match self {
            Tag::Name => "set name",
            Tag::Tag => "set tag",
            Tag::Message => "send message",
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'N' => Ok(Tag::Name),
            b'T' => Ok(Tag::Tag),
            b'M' => Ok(Tag::Message),
            _ => Err(()),
        }
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// One protocol unit: a tag and its argument bytes.
///
/// Frames are built from a single input line and consumed by transmission; they
/// are never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tag: Tag,
    pub argument: Vec<u8>,
}

impl Frame {
    /// Creates a frame with the given tag and argument.
    pub fn new(tag: Tag, argument: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            argument: argument.into(),
        }
    }

    /// Returns `true` if the argument can be framed unambiguously, i.e. it
    /// contains no NUL byte.
    pub fn is_well_formed(&self) -> bool {
        !self.argument.contains(&FRAME_TERMINATOR)
    }

    /// Size of the frame on the wire (tag + argument + terminator).
    pub fn encoded_len(&self) -> usize {
        self.argument.len() + 2
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a [`Frame`] into its wire representation.
///
/// # Examples
///
/// ```rust
/// use nulchat_core::{encode_frame, Frame, Tag};
///
/// let bytes = encode_frame(&Frame::new(Tag::Name, "Alice"));
/// assert_eq!(bytes, b"NAlice\0");
/// ```
pub fn encode_frame(frame: &Frame) -> Vec<u8> {
    let mut buf = Vec::with_capacity(frame.encoded_len());
    buf.push(frame.tag.as_byte());
    buf.extend_from_slice(&frame.argument);
    buf.push(FRAME_TERMINATOR);
    buf
}

/// Decodes one [`Frame`] from the beginning of `bytes`.
///
/// Returns the frame and the number of bytes consumed (terminator included), so
/// the caller can advance their read cursor.
///
/// # Errors
///
/// Returns [`FrameError::Incomplete`] if no terminator follows the tag yet, and
/// [`FrameError::UnknownTag`] if the leading byte is not a known tag.
///
/// # Examples
///
/// ```rust
/// use nulchat_core::{decode_frame, Frame, Tag};
///
/// let (frame, n) = decode_frame(b"Thello\0Mrest").unwrap();
/// assert_eq!(frame, Frame::new(Tag::Tag, "hello"));
/// assert_eq!(n, 7);
/// ```
pub fn decode_frame(bytes: &[u8]) -> Result<(Frame, usize), FrameError> {
    let Some(&tag_byte) = bytes.first() else {
        return Err(FrameError::Incomplete { available: 0 });
    };
    let tag = Tag::try_from(tag_byte).map_err(|_| FrameError::UnknownTag(tag_byte))?;

    let body = &bytes[1..];
    let end = body
        .iter()
        .position(|&b| b == FRAME_TERMINATOR)
        .ok_or(FrameError::Incomplete {
            available: bytes.len(),
        })?;

    Ok((Frame::new(tag, &body[..end]), end + 2))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
