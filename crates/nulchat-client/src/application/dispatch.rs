//! Dispatcher: turns input lines into frames on the connection.
//!
//! # State machine
//!
//! ```text
//!                 line read, frame sent
//!                  ┌────────────┐
//!                  ▼            │
//!  connect ──► Running ─────────┘
//!                  │
//!                  ├── end of input ─────────────► Terminated(Clean)
//!                  │
//!                  └── read / line / send error ─► Terminated(Error)
//! ```
//!
//! There is no way back from a terminal state.  The caller owns the
//! connection and closes it once [`Dispatcher::run`] returns, on either path.

use std::io::BufRead;

use nulchat_core::{classify_line, send_frame, SendError, Transport};
use thiserror::Error;
use tracing::{debug, info};

use crate::application::line_reader::{LineError, LineReader};

/// Why the dispatch loop stopped with an error.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The input line could not be read or accepted.
    #[error(transparent)]
    Line(#[from] LineError),

    /// A frame could not be sent.
    #[error(transparent)]
    Send(#[from] SendError),
}

/// How a terminated session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// End of input was reached.
    Clean,
    /// A read, line, or send error stopped the session.
    Error,
}

/// Dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Reading and sending.
    Running,
    /// Finished; no further lines are read.
    Terminated(Termination),
}

/// Reads lines from `R` and sends one frame per line on `T`.
pub struct Dispatcher<R, T> {
    lines: LineReader<R>,
    transport: T,
    state: SessionState,
    frames_sent: usize,
}

impl<R: BufRead, T: Transport> Dispatcher<R, T> {
    /// Creates a dispatcher in the `Running` state.
    pub fn new(input: R, transport: T, max_line_len: usize) -> Self {
        let lines = LineReader::new(input, max_line_len);
        debug!(max_line_len = lines.max_len(), "reading input lines");
        Self {
            lines,
            transport,
            state: SessionState::Running,
            frames_sent: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of frames sent so far.
    pub fn frames_sent(&self) -> usize {
        self.frames_sent
    }

    /// Handles one input line.
    ///
    /// Returns the state after the step.  Once terminated, further calls do
    /// nothing and return the terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] and moves to `Terminated(Error)` if the line
    /// cannot be read or its frame cannot be sent.
    pub fn step(&mut self) -> Result<SessionState, DispatchError> {
        if self.state != SessionState::Running {
            return Ok(self.state);
        }

        let line = match self.lines.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!(frames = self.frames_sent, "end of input");
                self.state = SessionState::Terminated(Termination::Clean);
                return Ok(self.state);
            }
            Err(e) => {
                self.state = SessionState::Terminated(Termination::Error);
                return Err(e.into());
            }
        };

        let frame = classify_line(line);
        debug!(tag = ?frame.tag, "dispatching line");
        if let Err(e) = send_frame(&mut self.transport, &frame) {
            self.state = SessionState::Terminated(Termination::Error);
            return Err(e.into());
        }
        self.frames_sent += 1;
        Ok(self.state)
    }

    /// Steps until a terminal state is reached.
    ///
    /// Returns the number of frames sent on a clean end of input.
    ///
    /// # Errors
    ///
    /// Returns the first [`DispatchError`].
    pub fn run(mut self) -> Result<usize, DispatchError> {
        while self.step()? == SessionState::Running {}
        Ok(self.frames_sent)
    }

    /// Gives the transport back, e.g. to inspect what was written.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
