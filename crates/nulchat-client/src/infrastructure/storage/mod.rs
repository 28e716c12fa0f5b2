//! Storage infrastructure: optional on-disk configuration.
//!
//! - **`config`** – TOML config file loading and merging onto
//!   [`ClientConfig`](crate::domain::ClientConfig).

pub mod config;
