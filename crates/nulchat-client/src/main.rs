//! nulchat client entry point.
//!
//! Parses the command line, sets up logging, builds the [`ClientConfig`], and
//! runs one session over standard input.
//!
//! # Usage
//!
//! ```text
//! nulchat [OPTIONS]
//!
//! Options:
//!   -v                    Be more verbose (repeat for more)
//!       --host <HOST>     Server hostname [default: localhost]
//!       --port <PORT>     Server port [default: 7390]
//!       --max-line <N>    Longest input line in bytes, newline included [default: 1023]
//!       --config <PATH>   TOML config file
//!   -h, --help            Print help
//!   -V, --version         Print version
//! ```
//!
//! Typed lines become frames: `/name X` sets the name, `/tag X` sets the tag,
//! anything else is sent as a message.  End of input (Ctrl-D) quits.
//!
//! # Exit statuses
//!
//! | code | meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | end of input reached                                      |
//! | 1    | connect, send, read, input line, or config file failure   |
//! | 2    | bad command line, or `-h`                                 |
//! | 3    | address resolution or socket creation failure             |

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nulchat_client::domain::{ClientConfig, ExitStatus, Verbosity};
use nulchat_client::infrastructure::storage::config::load_config_file;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Minimal interactive chat client.
///
/// Reads lines from standard input and sends each one to the server as a
/// NUL-terminated frame.
#[derive(Debug, Parser)]
#[command(name = "nulchat", version)]
struct Cli {
    /// Be more verbose (repeat for more).
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Server hostname or address [default: localhost].
    #[arg(long, env = "NULCHAT_HOST")]
    host: Option<String>,

    /// Server port [default: 7390].
    #[arg(long, env = "NULCHAT_PORT")]
    port: Option<u16>,

    /// Longest accepted input line in bytes, newline included [default: 1023].
    #[arg(long = "max-line", env = "NULCHAT_MAX_LINE")]
    max_line: Option<usize>,

    /// TOML config file; command-line values take precedence over it.
    #[arg(long, env = "NULCHAT_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layers the config file (if any) and the CLI values over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the named config file cannot be read or parsed.
    fn into_client_config(self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("can't load config file '{}'", path.display()))?
                .into_client_config(),
            None => ClientConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(max_line) = self.max_line {
            config.max_line_len = max_line;
        }
        config.verbosity = Verbosity(self.verbose);
        Ok(config)
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_logging(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitStatus::Usage.into(),
            };
        }
    };

    init_logging(Verbosity(cli.verbose));

    let config = match cli.into_client_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("nulchat: {e:#}");
            return ExitStatus::Common.into();
        }
    };
    info!(host = %config.host, port = config.port, "nulchat starting");

    match nulchat_client::run_session(&config, io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "session failed");
            eprintln!("nulchat: {e}");
            e.exit_status().into()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
