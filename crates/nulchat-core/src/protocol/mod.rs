//! Protocol module containing the frame codec and the input line classifier.

pub mod command;
pub mod frame;

pub use command::{classify_line, NAME_PREFIX, TAG_PREFIX};
pub use frame::{decode_frame, encode_frame, Frame, FrameError, Tag, FRAME_TERMINATOR};
