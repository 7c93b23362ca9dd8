pub mod parser;
pub mod scraper;
