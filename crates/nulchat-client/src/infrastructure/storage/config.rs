//! TOML-based configuration file for the client.
//!
//! The file is optional and only read when named with `--config` (or
//! `NULCHAT_CONFIG`).  Every key is optional; whatever is absent keeps its
//! built-in default.  Example:
//!
//! ```toml
//! [server]
//! host = "localhost"
//! port = 7390
//!
//! [input]
//! max_line_len = 1023
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the key is absent, so a file that only sets `port` is
//! still complete once parsed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ClientConfig, DEFAULT_HOST, DEFAULT_MAX_LINE_LEN, DEFAULT_PORT};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level layout of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub input: InputSection,
}

/// Where the chat server lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSection {
    /// Hostname or address literal.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Input line handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSection {
    /// Longest accepted input line in bytes, newline included.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
        }
    }
}

impl FileConfig {
    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds a [`ClientConfig`] from this file, leaving verbosity at its default.
    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig {
            host: self.server.host,
            port: self.server.port,
            max_line_len: self.input.max_line_len,
            ..ClientConfig::default()
        }
    }
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or
/// [`ConfigError::Parse`] if its contents are not valid.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FileConfig::from_toml_str(&text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let cfg = FileConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.into_client_config(), ClientConfig::default());
    }

    #[test]
    fn test_partial_server_section_keeps_other_defaults() {
        // Arrange
        let text = "[server]\nport = 9000\n";

        // Act
        let cfg = FileConfig::from_toml_str(text).unwrap().into_client_config();

        // Assert
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.max_line_len, 1023);
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let text = r#"
            [server]
            host = "chat.example"
            port = 7000

            [input]
            max_line_len = 64
        "#;

        let cfg = FileConfig::from_toml_str(text).unwrap().into_client_config();

        assert_eq!(cfg.host, "chat.example");
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.max_line_len, 64);
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result = FileConfig::from_toml_str("[server\nport = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_out_of_range_port_returns_parse_error() {
        let result = FileConfig::from_toml_str("[server]\nport = 70000\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_file_config_round_trips_through_toml() {
        let original = FileConfig {
            server: ServerSection {
                host: "::1".to_string(),
                port: 1234,
            },
            input: InputSection { max_line_len: 2048 },
        };

        let text = toml::to_string(&original).unwrap();

        assert_eq!(FileConfig::from_toml_str(&text).unwrap(), original);
    }

    #[test]
    fn test_load_missing_file_returns_io_error() {
        let path = std::env::temp_dir().join(format!("nulchat_missing_{}.toml", Uuid::new_v4()));

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nulchat_missing_"));
    }

    #[test]
    fn test_load_config_file_from_temp_dir() {
        // Arrange
        let path = std::env::temp_dir().join(format!("nulchat_test_{}.toml", Uuid::new_v4()));
        std::fs::write(&path, "[input]\nmax_line_len = 80\n").unwrap();

        // Act
        let result = load_config_file(&path);
        let _ = std::fs::remove_file(&path);

        // Assert
        assert_eq!(result.unwrap().input.max_line_len, 80);
    }
}
