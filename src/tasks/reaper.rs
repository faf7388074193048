//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps `store` once every `interval`.
///
/// The first sweep fires one interval after this call, however late the
/// spawned task first runs. Each sweep locks the store and removes every
/// entry that has reached `interval` in age. A sweep delayed by a busy
/// runtime is not followed by a burst of catch-up sweeps.
///
/// The task ends when `stop` receives a value or its sender is dropped.
///
/// # Arguments
/// * `store` - Shared entry map, the same mutex guards `get` and `put`
/// * `interval` - Sweep period, also the entry lifetime. Must be non-zero.
/// * `stop` - Stop signal
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(interval)));
/// let (stop_tx, stop_rx) = watch::channel(());
/// let handle = spawn_reaper_task(store.clone(), interval, stop_rx);
/// // Later:
/// drop(stop_tx);
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut stop: watch::Receiver<()>,
) -> JoinHandle<()> {
    // Anchored to the call, not to the task's first poll
    let first_sweep = Instant::now() + interval;

    tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "Starting cache reaper");

        let mut ticker = time::interval_at(first_sweep, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = stop.changed() => {
                    debug!("Cache reaper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = store.lock().await;
                        let removed = guard.reap_expired(Instant::now());
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "Cache reaper removed expired entries");
                    } else {
                        debug!(remaining, "Cache reaper found no expired entries");
                    }
                }
            }
        }
    })
}
