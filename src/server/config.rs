//! Server configuration.

use std::net::SocketAddr;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The listen backlog. Kept small: pending connections queue while the
    /// current one is being served.
    pub backlog: u32,
    /// The read buffer size. At most this many bytes of a request are read.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    /// Create a configuration listening on all interfaces on the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            backlog: 3,
            read_buffer_size: 1024,
        }
    }
}
