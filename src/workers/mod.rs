pub mod market_refresher;
