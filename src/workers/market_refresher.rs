use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::models::market::MarketCache;

/// Refreshes the cache once immediately, then on every tick of a fixed
/// period until the shutdown channel fires or its sender is dropped.
pub async fn run(cache: Arc<MarketCache>, period: Duration, mut shutdown: mpsc::Receiver<()>) {
    info!("Market refresher started, period {:?}", period);

    cache.refresh().await;

    let mut ticker = interval(period);
    // a slow fetch must not cause catch-up double fires
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick of an interval completes at once; the immediate
    // refresh above already covered it
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                cache.refresh().await;
            }
            _ = shutdown.recv() => {
                info!("Market refresher stopped");
                return;
            }
        }
    }
}
