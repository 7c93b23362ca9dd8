use chrono::Utc;
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::components::parser::parse_quotes;
use crate::components::scraper::QuoteFetcher;
use crate::models::quotes::MarketSnapshot;

/// Process-wide market quote cache. Holds the last good snapshot and
/// refreshes it from the injected fetcher; a failed refresh leaves the
/// snapshot untouched. At most one fetch is in flight at any time.
pub struct MarketCache {
    snapshot: RwLock<MarketSnapshot>,
    refreshing: AtomicBool,
    fetcher: Arc<dyn QuoteFetcher>,
}

// Clears the in-flight flag even if the refresh future is dropped or
// panics mid-fetch.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl MarketCache {
    pub fn new(fetcher: Arc<dyn QuoteFetcher>) -> Self {
        MarketCache {
            snapshot: RwLock::new(MarketSnapshot::default()),
            refreshing: AtomicBool::new(false),
            fetcher,
        }
    }

    /// Current snapshot, without triggering a fetch. Never blocks on a
    /// refresh in progress.
    pub fn snapshot(&self) -> MarketSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Fetches and applies a new snapshot. Overlapping callers get the
    /// current snapshot back immediately instead of spawning a second
    /// subprocess. Failures are logged and absorbed; the previous
    /// snapshot survives them unchanged.
    pub async fn refresh(&self) -> MarketSnapshot {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }

        let _guard = InFlight(&self.refreshing);

        match self.fetcher.fetch_raw().await {
            Ok(raw) => match parse_quotes(&raw) {
                Ok(quotes) => {
                    let next = MarketSnapshot {
                        quotes,
                        fetched_at: Some(Utc::now().to_rfc3339()),
                    };
                    let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());

                    info!("market cache: updated {} quotes", next.quotes.len());

                    *guard = next;
                }
                Err(e) => error!("market cache: bad scraper output: {e}"),
            },
            Err(e) => error!("market cache: fetch failed: {e}"),
        }

        self.snapshot()
    }
}
