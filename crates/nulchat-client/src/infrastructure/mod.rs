//! Infrastructure layer for the client application.
//!
//! Contains the OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `domain`, `application` and
//! `nulchat_core`, but MUST NOT be imported by the `domain` layer.
//!
//! # Sub-modules
//!
//! - **`network`** – resolves the server address, opens the IPv6 stream
//!   socket, and implements [`nulchat_core::Transport`] for it.
//!
//! - **`storage`** – reads the optional TOML config file.

pub mod network;
pub mod storage;
