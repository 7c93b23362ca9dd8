pub mod market;
pub mod quotes;
