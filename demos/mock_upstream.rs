//! Local stand-in for the Hive Engine RPC endpoint.
//!
//! Run it, then start the proxy against it:
//! `he-cors-proxy --config proxy.example.toml` with `upstream.url = "http://127.0.0.1:8081/rpc"`.

use axum::{body::Bytes, http::header, routing::post, Router};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new().route(
        "/rpc",
        post(|body: Bytes| async move {
            println!("rpc request: {}", String::from_utf8_lossy(&body));
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"id":1,"jsonrpc":"2.0","result":{"blockNumber":1,"transactions":[]}}"#,
            )
        }),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Mock upstream listening on http://{}/rpc", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
