//! nulchat-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does nulchat-client do? (for beginners)
//!
//! The client is a line-at-a-time chat front end:
//!
//! 1. Resolves the server address (`localhost:7390` unless configured
//!    otherwise), preferring IPv6.
//! 2. Opens one TCP connection.
//! 3. Reads lines from standard input.  `/name X` sets the display name,
//!    `/tag X` sets the tag, anything else is a chat message.
//! 4. Sends each line as one NUL-terminated frame.
//! 5. Closes the connection at end of input, or on the first error.
//!
//! Nothing is ever read back from the server.

/// Domain layer: configuration, verbosity, exit statuses.
pub mod domain;

/// Application layer: bounded line reading and the dispatch loop.
pub mod application;

/// Infrastructure layer: address resolution and the TCP socket.
pub mod infrastructure;

/// Error taxonomy shared by all layers.
pub mod error;

use std::io::BufRead;

use tracing::debug;

use crate::application::dispatch::Dispatcher;
use crate::domain::ClientConfig;
use crate::error::ClientError;
use crate::infrastructure::network::{connect_to_server, resolve_server_addr};

/// Runs one complete client session against `input`.
///
/// Resolves the server, connects, and dispatches lines until end of input.
/// The connection is closed when this function returns, whether it returns
/// `Ok` or `Err`.
///
/// # Errors
///
/// Returns the first [`ClientError`] encountered; its
/// [`exit_status`](ClientError::exit_status) tells the caller how to exit.
pub fn run_session<R: BufRead>(config: &ClientConfig, input: R) -> Result<(), ClientError> {
    let addr = resolve_server_addr(&config.host, config.port)?;
    let mut connection = connect_to_server(addr, config.verbosity)?;

    let result = Dispatcher::new(input, &mut connection, config.max_line_len).run();
    drop(connection);
    debug!("connection closed");

    let frames = result?;
    debug!(frames, "session finished");
    Ok(())
}
