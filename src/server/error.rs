//! Error types for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Creating the listening socket failed.
    #[error("failed to create socket: {0}")]
    Socket(std::io::Error),

    /// The configured port is already bound by another process.
    #[error("port {port} is already in use")]
    AddrInUse { port: u16 },

    /// Binding the listening socket failed for a reason other than the
    /// address being in use.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The bound socket could not start listening.
    #[error("failed to listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// I/O error on the listening socket or an accepted connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
