//! IdMark identity hash service.
//!
//! Exposes one operation over HTTP: `POST /hash` computes a stable identity
//! digest from an email address and a Unix timestamp by calling the natively
//! compiled digest routine through its C ABI.
//!
//! Usage:
//!   idmark-server --port 8080
//!
//! The service is stateless; every request is independent.

use anyhow::{Context, Result};
use clap::Parser;
use idmark_ffi::ForeignHasher;
use idmark_server::build_router;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "idmark-server")]
#[command(about = "IdMark identity hash service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    // The digest routine has no global state, so concurrent request tasks
    // call it without serialization.
    let hasher = ForeignHasher::new(idmark_hashlib::hash_identity, idmark_hashlib::free_str);
    let app = build_router(hasher);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("failed to bind port {}", args.port))?;
    info!("IdMark server running on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
