use serde_json::Value;
use thiserror::Error;

use crate::models::quotes::Quote;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON output: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Top-level JSON value is not an array")]
    NotArray,
}

/// Validates scraper stdout into an ordered quote list. Pure: no I/O,
/// no shared state.
pub fn parse_quotes(raw: &str) -> Result<Vec<Quote>, ParseError> {
    let value: Value = serde_json::from_str(raw)?;

    if !value.is_array() {
        return Err(ParseError::NotArray);
    }

    let quotes: Vec<Quote> = serde_json::from_value(value)?;

    Ok(quotes)
}
