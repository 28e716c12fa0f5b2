//! Application layer for the client.
//!
//! - **`line_reader`** – reads one bounded, newline-terminated line at a time.
//! - **`dispatch`** – the session state machine: read a line, classify it,
//!   send the frame, repeat until end of input or the first error.
//!
//! Both are generic over their I/O (`BufRead` in, [`Transport`] out), so the
//! tests here never open a socket.
//!
//! [`Transport`]: nulchat_core::Transport

pub mod dispatch;
pub mod line_reader;
