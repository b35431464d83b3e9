//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Register handlers for the shutdown signals (SIGTERM, SIGINT)
pub fn register_shutdown_signals() -> std::io::Result<Signals> {
    Signals::new([signal_hook::consts::SIGTERM, signal_hook::consts::SIGINT])
}

/// Wait for one of the registered shutdown signals and return it
pub async fn shutdown_signal(mut signals: Signals) -> std::io::Result<i32> {
    let handle = signals.handle();

    let signal = signals.next().await;
    handle.close();

    match signal {
        Some(signal) => {
            info!("Received signal: {}", signal);
            Ok(signal)
        }
        None => Err(std::io::Error::other("signal stream closed")),
    }
}
