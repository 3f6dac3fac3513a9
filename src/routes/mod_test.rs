use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("rebirth-studio")
        .site_root("target/site-test")
        .build()
}

/// Serve `router` on an ephemeral port and return the status line for `path`.
async fn status_line(router: Router, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response.lines().next().unwrap_or_default().to_owned()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let line = status_line(router(test_options()), "/healthz").await;
    assert_eq!(line, "HTTP/1.1 200 OK");
}

// =============================================================================
// Fallbacks
// =============================================================================

#[tokio::test]
async fn unknown_path_is_not_found() {
    let line = status_line(router(test_options()), "/definitely-not-here.txt").await;
    assert_eq!(line, "HTTP/1.1 404 Not Found");
}

#[tokio::test]
async fn missing_bundle_asset_is_not_found() {
    let line = status_line(router(test_options()), "/pkg/missing.wasm").await;
    assert_eq!(line, "HTTP/1.1 404 Not Found");
}
