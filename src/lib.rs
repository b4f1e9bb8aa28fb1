//! A minimal sequential HTTP demo server.
//!
//! This library provides a deliberately tiny HTTP server that accepts one
//! connection at a time: each connection is read, answered with a fixed HTML
//! page reporting the configured port and the current Unix time, and closed
//! before the next connection is accepted.
//!
//! # Features
//!
//! - Single-threaded, strictly sequential accept loop
//! - Fixed `HTTP/1.1 200 OK` response with deterministic header order
//! - Bind failures distinguish "address in use" from other OS errors
//! - Clean shutdown on Ctrl+C
//!
//! # Examples
//!
//! ```no_run
//! use nanohttp_rs::{HttpServer, ServerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig {
//!         addr: "0.0.0.0:8080".parse()?,
//!         ..ServerConfig::default()
//!     };
//!
//!     let server = HttpServer::new(config);
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! There is intentionally no request parsing, no routing, and no concurrency:
//! the server exists to demonstrate the bare accept/read/write/close cycle.

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use server::{Error, HttpResponse, HttpServer, ServerConfig, StatusCode};
