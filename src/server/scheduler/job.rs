use std::time::Duration;
use log::info;
use tokio::{pin, select, time};
use tokio_util::sync::CancellationToken;
use tokio_util::task::task_tracker;
use crate::server::state::AppState;
use crate::server::util::time::helper::get_utc_now;

/// how often idle carts are looked for
pub(crate) const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

async fn worker(state: AppState, idle: Duration, every: Duration, cancel_token: CancellationToken) {
    let interval = time::interval(every);
    pin!(interval);
    loop {
        select! {
            _ = interval.tick() => {},
            _ = cancel_token.cancelled() => {
                info!("received cancel signal, returning gracefully");
                return;
            }
        }

        let evicted = state.evict_idle_carts(get_utc_now(), idle).await;
        if evicted > 0 {
            info!("evicted {} idle carts", evicted);
        }
    }
}

/// Periodically drop carts nobody touched for `idle`. Returns once
/// `cancel_token` is cancelled.
pub async fn cart_sweeper(state: AppState, idle: Duration, every: Duration, cancel_token: CancellationToken) {
    let tracker = task_tracker::TaskTracker::new();
    tracker.spawn(worker(state, idle, every, cancel_token));
    if tracker.close() {
        tracker.wait().await;
    }
}
