//! Shot Clock - A game clock and shot clock pair driven over HTTP
//!
//! This is the main entry point for the shot-clock server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use shot_clock::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::clock_monitor_task,
    utils::{register_shutdown_signals, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("shot_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting shot-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state, clocks start idle at 12:00 / 24
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Follow clock snapshots in the background
    tokio::spawn(clock_monitor_task(state.clock.subscribe()));

    // Install signal handlers before serving
    let signals = register_shutdown_signals()?;

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start            - Start both clocks");
    info!("  POST /stop             - Stop both clocks");
    info!("  POST /reset-shot-clock - Reset the shot clock to 24");
    info!("  GET  /status           - Current clock values");
    info!("  GET  /health           - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        signal = shutdown_signal(signals) => {
            if let Err(e) = signal {
                error!("Failed to wait for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        }
    }

    // Tear down both countdown tasks before exiting
    state.clock.stop();

    info!("Server shutdown complete");
    Ok(())
}
