use anyhow::Result;
use bandwidth_analyzer::logging::init_logging_with_config;
use bandwidth_analyzer::server::{start_server, AppState, ServerConfig, ServerMonitor};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let config = ServerConfig::parse();

    // Initialize structured logging with config options
    init_logging_with_config(&config.log_level, config.is_json_format());

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.address();
    let state = AppState::new(ServerMonitor::new());

    start_server(&config, state).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            anyhow::anyhow!(
                "Failed to bind to {}: Address already in use. Try a different port or ensure no other process is using it.",
                addr
            )
        } else {
            anyhow::Error::new(e).context(format!("Server error on {}", addr))
        }
    })?;

    info!("Server stopped");
    Ok(())
}
