pub const REFRESH_INTERVAL_SECS: u64 = 10;
pub const SCRAPER_TIMEOUT_SECS: u64 = 60;
pub const SCRAPER_COMMAND: &str = "python3";
pub const SCRAPER_SCRIPT: &str = "scripts/google_finance_scraper.py";
