//! # nulchat-core
//!
//! Shared library for nulchat containing the wire frame codec, the command
//! classifier that turns input lines into frames, and the send-all transport
//! logic that pushes frames onto a stream.
//!
//! It has no dependencies on OS sockets: the byte sink is abstracted behind the
//! [`Transport`] trait, and the real TCP implementation lives in the client
//! crate.
//!
//! # Architecture overview (for beginners)
//!
//! nulchat is a tiny chat client.  The user types lines; each line becomes one
//! *frame* on the wire:
//!
//! ```text
//! [tag:1][argument:N][0x00]
//! ```
//!
//! There is no length prefix.  The NUL byte at the end tells the server where
//! the frame stops, which is why an argument must never contain a NUL itself.
//!
//! - **`protocol`** – The frame format (`Tag`, `Frame`, encode/decode) and the
//!   mapping from typed input lines (`/name Alice`, `/tag dev`, `hello`) to
//!   frames.
//!
//! - **`transport`** – How bytes leave the process.  `send_all` keeps writing
//!   until the whole buffer is accepted, even when the socket only takes part
//!   of it per call, and `send_frame` writes one complete frame with the
//!   "more data follows" hint on every write except the terminator.

pub mod protocol;
pub mod transport;

// Re-export the most-used types at the crate root so callers can write
// `nulchat_core::Frame` instead of `nulchat_core::protocol::frame::Frame`.
pub use protocol::command::classify_line;
pub use protocol::frame::{decode_frame, encode_frame, Frame, FrameError, Tag, FRAME_TERMINATOR};
pub use transport::{send_all, send_frame, SendError, SendOutcome, Transport};
