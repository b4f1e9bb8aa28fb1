//! End-to-end tests for the sequential accept loop over real sockets.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

use nanohttp_rs::{HttpServer, ServerConfig};

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Bind a server on an ephemeral port and run its accept loop in the
/// background. Returns the address clients should connect to.
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServerConfig {
        addr,
        ..ServerConfig::default()
    });

    tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    addr
}

/// Send one request and read the full response until the server closes.
async fn fetch(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = timeout(IO_TIMEOUT, TcpStream::connect(addr))
        .await
        .expect("connect timed out")
        .unwrap();

    timeout(IO_TIMEOUT, stream.write_all(request))
        .await
        .expect("write timed out")
        .unwrap();

    let mut response = Vec::new();
    timeout(IO_TIMEOUT, stream.read_to_end(&mut response))
        .await
        .expect("read timed out")
        .unwrap();

    String::from_utf8(response).unwrap()
}

fn content_length(response: &str) -> usize {
    response
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .expect("missing Content-Length")
        .trim()
        .parse()
        .unwrap()
}

fn body(response: &str) -> &str {
    response
        .split_once("\r\n\r\n")
        .map(|(_, b)| b)
        .unwrap_or("")
}

#[tokio::test]
async fn responds_with_matching_content_length() {
    let addr = spawn_server().await;

    let response = fetch(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(
        response.starts_with("HTTP/1.1 200 OK\r\n"),
        "response: {response}"
    );
    assert_eq!(content_length(&response), body(&response).len());
}

#[tokio::test]
async fn body_contains_configured_port() {
    let addr = spawn_server().await;

    let response = fetch(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    let port = addr.port().to_string();
    assert!(
        body(&response).contains(&port),
        "body does not mention port {port}: {response}"
    );
}

#[tokio::test]
async fn connection_is_closed_and_next_client_is_served() {
    let addr = spawn_server().await;

    // fetch() only returns once the server has closed the connection, so a
    // second successful fetch proves the loop came back around to accept.
    let first = fetch(addr, b"GET /a HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let second = fetch(addr, b"GET /b HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(first.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(second.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn responds_to_client_that_sends_nothing() {
    let addr = spawn_server().await;

    let mut stream = timeout(IO_TIMEOUT, TcpStream::connect(addr))
        .await
        .expect("connect timed out")
        .unwrap();

    // Close our write side without sending a byte
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    timeout(IO_TIMEOUT, stream.read_to_end(&mut response))
        .await
        .expect("read timed out")
        .unwrap();

    let response = String::from_utf8(response).unwrap();
    assert!(
        response.starts_with("HTTP/1.1 200 OK\r\n"),
        "response: {response}"
    );
}
