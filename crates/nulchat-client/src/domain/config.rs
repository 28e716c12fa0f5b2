//! Client configuration types.
//!
//! [`ClientConfig`] is the single source of truth for runtime settings.  It is
//! built once at startup (defaults, then the optional config file, then CLI
//! flags) and passed by reference to whatever needs it.  Nothing reads
//! settings from global state.

/// Server hostname used when nothing else is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Server port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 7390;

/// Longest accepted input line in bytes, trailing newline included.
///
/// One less than the 1024-byte line buffer: the last slot is reserved, so a
/// 1023-character line plus its newline does not fit.
pub const DEFAULT_MAX_LINE_LEN: usize = 1023;

/// How chatty the client is, counted from repeated `-v` flags.
///
/// | count | log filter |
/// |-------|------------|
/// | 0     | `warn`     |
/// | 1     | `info`     |
/// | 2     | `debug`    |
/// | 3+    | `trace`    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// Returns `true` once at least one `-v` was given.
    pub fn is_verbose(self) -> bool {
        self.0 >= 1
    }

    /// `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self.0 {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// All runtime configuration for one client session.
///
/// # Example
///
/// ```rust
/// use nulchat_client::domain::ClientConfig;
///
/// let cfg = ClientConfig::default();
/// assert_eq!(cfg.host, "localhost");
/// assert_eq!(cfg.port, 7390);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Hostname or address literal of the chat server.
    pub host: String,
    /// TCP port of the chat server.
    pub port: u16,
    /// Longest accepted input line, trailing newline included.
    pub max_line_len: usize,
    /// Diagnostic verbosity.
    pub verbosity: Verbosity,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            verbosity: Verbosity::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
