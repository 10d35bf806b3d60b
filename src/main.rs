//! Hive Engine CORS proxy.
//!
//! ```text
//!     Browser                      ┌──────────────────────────────┐
//!     ───────── GET / ────────────▶│ health JSON                  │
//!     ───────── OPTIONS /he-proxy ▶│ 204 + CORS headers           │
//!     ───────── POST /he-proxy ───▶│ upstream client ─────────────┼──▶ api.hive-engine.com/rpc
//!     ◀──────── status/body + CORS │◀─────────────────────────────┼──
//!                                  └──────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use he_cors_proxy::config::loader::resolve_config;
use he_cors_proxy::config::ListenerOverrides;
use he_cors_proxy::observability::logging;
use he_cors_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "he-cors-proxy", version)]
#[command(about = "CORS forwarding proxy for the Hive Engine JSON-RPC API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, env = "HE_PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host [default: 0.0.0.0]
    #[arg(long, env = "HE_PROXY_HOST")]
    host: Option<String>,

    /// Listening port [default: 10000]
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ListenerOverrides {
        host: cli.host,
        port: cli.port,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init(&config.observability);

    tracing::info!("he-cors-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
