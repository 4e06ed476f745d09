// Graceful shutdown module
// Waits for in-flight connections after the listener is closed

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::logger;

/// How often the active connection counter is checked
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait until no connections are active or the grace period runs out.
///
/// Connections have already been told to finish their current request, so
/// idle keep-alive connections close promptly. Returns the number still open.
pub async fn drain_connections(conn_counter: &AtomicUsize, grace_period: Duration) -> usize {
    logger::log_shutdown_started(conn_counter.load(Ordering::SeqCst), grace_period.as_secs());

    let deadline = tokio::time::Instant::now() + grace_period;
    let mut remaining = conn_counter.load(Ordering::SeqCst);

    while remaining > 0 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(POLL_INTERVAL).await;
        remaining = conn_counter.load(Ordering::SeqCst);
    }

    logger::log_shutdown_complete(remaining);
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_immediately_when_idle() {
        let counter = AtomicUsize::new(0);
        assert_eq!(drain_connections(&counter, Duration::from_secs(5)).await, 0);
    }

    #[tokio::test]
    async fn test_waits_for_connections_to_finish() {
        let counter = Arc::new(AtomicUsize::new(2));
        let worker = Arc::clone(&counter);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            worker.store(0, Ordering::SeqCst);
        });

        assert_eq!(drain_connections(&counter, Duration::from_secs(5)).await, 0);
    }

    #[tokio::test]
    async fn test_gives_up_after_grace_period() {
        let counter = AtomicUsize::new(1);
        assert_eq!(drain_connections(&counter, Duration::from_millis(100)).await, 1);
    }
}
