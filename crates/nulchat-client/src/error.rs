//! Error taxonomy for a client session.
//!
//! Every failure is fatal.  [`ClientError::exit_status`] sorts each variant
//! into one of the [`ExitStatus`] categories:
//!
//! | variant        | status   |
//! |----------------|----------|
//! | `Resolve`      | rare     |
//! | `NoAddress`    | rare     |
//! | `SocketCreate` | rare     |
//! | `PeerAddress`  | rare     |
//! | `Connect`      | common   |
//! | `Dispatch`     | common   |

use std::io;
use std::net::SocketAddrV6;

use thiserror::Error;

use crate::application::dispatch::DispatchError;
use crate::domain::ExitStatus;

/// Fatal error raised while setting up or running a session.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The resolver failed for the configured host and port.
    #[error("can't determine server address ({source})")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// The resolver succeeded but returned no usable address.
    #[error("can't determine server address (no addresses found for {host}:{port})")]
    NoAddress { host: String, port: u16 },

    /// The socket itself could not be created.
    #[error("can't create socket: {0}")]
    SocketCreate(#[source] io::Error),

    /// The socket was created but the connection was refused or timed out.
    #[error("can't connect to server at {addr}: {source}")]
    Connect {
        addr: SocketAddrV6,
        #[source]
        source: io::Error,
    },

    /// The connected peer's address could not be read back.
    #[error("can't determine server address ({0})")]
    PeerAddress(#[source] io::Error),

    /// Reading input or sending a frame failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ClientError {
    /// Exit status category for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ClientError::Resolve { .. }
            | ClientError::NoAddress { .. }
            | ClientError::SocketCreate(_)
            | ClientError::PeerAddress(_) => ExitStatus::Rare,
            ClientError::Connect { .. } | ClientError::Dispatch(_) => ExitStatus::Common,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
