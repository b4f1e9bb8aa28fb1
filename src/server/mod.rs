//! Sequential HTTP server implementation for nanohttp-rs.
//!
//! This module provides a simple HTTP server that serves exactly one
//! connection at a time and answers every request with the same HTML page.

mod config;
mod error;
mod http_server;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
pub use response::{HttpResponse, StatusCode};
