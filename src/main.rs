// External crate imports
use anyhow::Result;
use log::{info, warn};
use tokio::io::BufReader;
use tokio::select;

// Internal crate imports
use novaquant_engine::config_loader::AppConfig;
use novaquant_engine::domain::constants::DEFAULT_CONFIG_PATH;
use novaquant_engine::engine::{EngineBridge, InstantFillSimulator};

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries only wire messages, so every diagnostic goes to stderr.
    // The orchestrator drains stderr on a separate thread.
    let config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH);
    env_logger::Builder::new()
        .parse_filters(&config.app.log_filter)
        .init();
    info!("Logger initialized with filter '{}'", config.app.log_filter);

    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    let mut bridge = EngineBridge::new(reader, writer, Box::new(InstantFillSimulator));

    // Set up signal handler for SIGINT (Ctrl+C). The orchestrator stops the
    // engine by closing stdin or sending SIGTERM; SIGINT covers manual runs.
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    select! {
        result = bridge.run() => result?,
        _ = sigint.recv() => {
            warn!("SIGINT (Ctrl+C) received, shutting down");
        }
    }

    info!("Engine terminated");
    Ok(())
}
