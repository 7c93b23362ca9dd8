use log::{info, LevelFilter};
use market_data_rs::{
    components::scraper::ScraperFetcher,
    config::market::{REFRESH_INTERVAL_SECS, SCRAPER_COMMAND, SCRAPER_SCRIPT, SCRAPER_TIMEOUT_SECS},
    models::market::MarketCache,
    server::run_server,
    workers::market_refresher,
};
use simple_logger::SimpleLogger;
use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let port: u16 = std::env::var("PORT")
        .expect("ENV var PORT is required")
        .parse()
        .expect("ENV var PORT should be u16 number");
    let command =
        std::env::var("SCRAPER_COMMAND").unwrap_or_else(|_| SCRAPER_COMMAND.to_string());
    let script = std::env::var("SCRAPER_SCRIPT").unwrap_or_else(|_| SCRAPER_SCRIPT.to_string());

    let fetcher = Arc::new(ScraperFetcher::new(
        command,
        vec![script],
        Duration::from_secs(SCRAPER_TIMEOUT_SECS),
    ));
    let cache = Arc::new(MarketCache::new(fetcher));

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    let refresher = tokio::task::spawn(market_refresher::run(
        Arc::clone(&cache),
        Duration::from_secs(REFRESH_INTERVAL_SECS),
        shutdown_rx,
    ));

    tokio::select! {
        res = run_server(cache, port) => res.unwrap(),
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }

    let _ = shutdown_tx.send(()).await;
    let _ = refresher.await;
}
