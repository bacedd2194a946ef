//! Expiration Sweeper
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that removes expired entries from `store` every `interval`.
///
/// Each pass holds the store's write lock for one full scan, so readers and
/// writers wait for at most one pass. The first pass runs one `interval`
/// after spawning. The task exits as soon as `shutdown` is cancelled, whether
/// it is idle between ticks or waiting for the lock.
///
/// # Panics
/// Panics if `interval` is zero or if called outside a Tokio runtime.
pub fn spawn_sweeper(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting expiration sweeper");

        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let removed = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                mut guard = store.write() => guard.remove_expired(Instant::now()),
            };

            if removed > 0 {
                info!(removed, "Sweep removed expired entries");
            } else {
                debug!("Sweep found no expired entries");
            }
        }

        info!("Expiration sweeper stopped");
    })
}
