//! Dog API Gateway - Main Entry Point
//! JSON-RPC server proxying the dog.ceo image API

mod config;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use config::DaemonConfig;
use dogapi_api_rpc::RpcServer;
use dogapi_core::application::DogService;
use dogapi_infra_http::DogCeoClient;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let config = DaemonConfig::parse();
    config.validate()?;

    // 1. Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("dogapi=info"))?;

    match config.log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Dog API gateway v{} starting...", VERSION);

    // 2. Setup dependencies (DI wiring)
    info!(upstream = %config.upstream_url, "Initializing upstream client...");
    let upstream = Arc::new(
        DogCeoClient::new(config.upstream())
            .map_err(|e| anyhow::anyhow!("Upstream client setup failed: {}", e))?,
    );
    let service = Arc::new(DogService::new(upstream).with_deadline(config.call_deadline()));
    info!(
        deadline_ms = service.deadline().as_millis() as u64,
        "Upstream call deadline set"
    );

    // 3. Start JSON-RPC server
    let rpc_server = RpcServer::new(config.rpc(), service);
    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "Server listening");
    info!("Press Ctrl+C to shutdown");

    // 4. Wait for shutdown signal
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Shutdown signal received. Exiting gracefully...");
        }
        _ = rpc_handle.clone().stopped() => {
            info!("RPC server stopped unexpectedly");
        }
    }

    // 5. Graceful shutdown
    if rpc_handle.stop().is_ok() {
        rpc_handle.stopped().await;
    }

    info!("Shutdown complete.");

    Ok(())
}
