//! HTTP server implementation.

use std::net::SocketAddr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket};
use tokio::signal;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// A sequential HTTP server.
///
/// The server owns its listening socket for the lifetime of the accept loop
/// and serves exactly one connection at a time: accept, read once, respond,
/// close, then accept again.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Display the server banner.
    fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");
    }

    /// Bind the listening socket with the configured backlog.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(&self) -> Result<TcpListener, Error> {
        let socket = if self.config.addr.is_ipv6() {
            TcpSocket::new_v6()
        } else {
            TcpSocket::new_v4()
        }
        .map_err(Error::Socket)?;

        socket.bind(self.config.addr).map_err(|e| {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                Error::AddrInUse {
                    port: self.config.addr.port(),
                }
            } else {
                Error::Bind {
                    addr: self.config.addr,
                    source: e,
                }
            }
        })?;

        socket.listen(self.config.backlog).map_err(|e| Error::Listen {
            addr: self.config.addr,
            source: e,
        })
    }

    /// Start the server and serve connections until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_server_info();
        let listener = self.bind()?;
        self.serve(listener).await
    }

    /// Serve connections from an already-bound listener, one at a time.
    ///
    /// Each accepted connection is fully served and closed before the next
    /// accept. Accept failures are logged and the loop continues; only
    /// Ctrl+C ends it.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), Error> {
        let addr = listener.local_addr()?;
        info!("{}", Self::running_banner(addr));
        info!("Press Ctrl+C to stop the server");

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down");
                    return Ok(());
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, peer)) => {
                            if let Err(e) = Self::handle_connection(&mut socket, &self.config).await {
                                error!("Error serving connection from {peer}: {e}");
                            }
                        }
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            // Give the OS a moment before retrying
                            tokio::time::sleep(Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }
    }

    /// The line logged once the listener is bound.
    pub(crate) fn running_banner(addr: SocketAddr) -> String {
        format!("Server running on http://{addr}")
    }

    /// Handle a single connection.
    ///
    /// Reads at most one buffer's worth of the request, logs it, and writes
    /// the fixed HTML response. The response is sent even when the client
    /// sent nothing or the read itself failed.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf = vec![0; config.read_buffer_size];

        // A failed read is treated like an empty request
        let n = match socket.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                error!("Error reading request: {e}");
                0
            }
        };
        if n > 0 {
            info!("Request received from client:");
            info!("----------------------------------------");
            info!("{}", String::from_utf8_lossy(&buf[..n]));
            info!("----------------------------------------");
        }

        let response = Self::build_response(config.addr.port());
        socket.write_all(&response.to_bytes()).await?;
        socket.shutdown().await?;

        Ok(())
    }

    /// Build the fixed HTML response for the given port.
    pub(crate) fn build_response(port: u16) -> HttpResponse {
        let body = format!(
            "<html><body>\
             <h1>Hello from nanohttp-rs</h1>\
             <p>Server running on port: {port}</p>\
             <p>Time: {time}</p>\
             </body></html>",
            time = unix_time(),
        );

        HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_body_string(body)
            .with_header("Connection", "close")
    }
}

/// Seconds since the Unix epoch.
fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
