// Server loop module
// Accepts connections until shutdown is requested, then drains

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::shutdown::drain_connections;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop on the current `LocalSet`
///
/// Returns once shutdown was requested and in-flight connections finished
/// or the grace period elapsed.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let mut shutdown = signals.subscribe();

    logger::log_debug(&format!("Accept loop started on {}", listener.local_addr()?));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            signals.subscribe(),
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            Ok(()) = shutdown.changed() => {
                if *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    // Stop accepting before waiting on in-flight requests
    drop(listener);

    let grace = Duration::from_secs(state.config.performance.shutdown_grace_period);
    drain_connections(&active_connections, grace).await;
    Ok(())
}
