//! Domain layer for nulchat-client.
//!
//! Plain types with no I/O: the runtime configuration, the verbosity level,
//! and the process exit statuses.  The infrastructure layer and `main.rs`
//! populate these from the CLI, environment, and config file.

pub mod config;
pub mod exit;

pub use config::{ClientConfig, Verbosity, DEFAULT_HOST, DEFAULT_MAX_LINE_LEN, DEFAULT_PORT};
pub use exit::ExitStatus;
