//! Minimal HTTP listener that keeps the hosting platform's port check happy.

use std::net::SocketAddr;

use axum::{Router, http::StatusCode, routing::get};
use log::{error, info};
use tokio::net::TcpListener;

use crate::error::Result;

const ALIVE_BODY: &str = "Bot ativo";

fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/{*path}", get(alive))
}

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE_BODY)
}

/// Start the listener without stopping the bot on failure.
///
/// Returns the bound address, or `None` when the listener could not start.
pub async fn start(port: u16) -> Option<SocketAddr> {
    match spawn(port).await {
        Ok(address) => Some(address),
        Err(e) => {
            error!("Keep-alive listener failed to start: {e}");
            None
        }
    }
}

/// Bind `0.0.0.0:port` and serve in the background.
async fn spawn(port: u16) -> Result<SocketAddr> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    serve(listener)
}

fn serve(listener: TcpListener) -> Result<SocketAddr> {
    let address = listener.local_addr()?;
    info!("Keep-alive listener started on {address}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            error!("Keep-alive listener terminated unexpectedly: {e}");
        }
    });

    Ok(address)
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use super::*;

    async fn http_get(address: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(address).await.expect("connect");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream
            .write_all(request.as_bytes())
            .await
            .expect("write request");
        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("read response");
        response
    }

    #[tokio::test]
    async fn answers_any_path() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = serve(listener).expect("serve");

        for path in ["/", "/healthz", "/a/b"] {
            let response = http_get(address, path).await;
            assert!(response.starts_with("HTTP/1.1 200"), "{path}: {response}");
            assert!(response.ends_with(ALIVE_BODY), "{path}: {response}");
        }
    }

    #[tokio::test]
    async fn busy_port_does_not_abort_startup() {
        let holder = TcpListener::bind("0.0.0.0:0").await.expect("bind");
        let port = holder.local_addr().expect("local addr").port();

        assert!(spawn(port).await.is_err());
        assert_eq!(start(port).await, None);
    }
}
