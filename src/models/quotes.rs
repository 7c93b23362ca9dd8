use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub label: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change_percent: Option<f64>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub quotes: Vec<Quote>,
    pub fetched_at: Option<String>,
}

// The scraper may emit null or junk for price fields; anything
// non-numeric decodes to None instead of failing the quote.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.as_ref().and_then(Value::as_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quote_decodes_with_all_fields() {
        let quote: Quote = serde_json::from_value(json!({
            "id": "btc",
            "label": "비트코인 (BTC)",
            "price": 70000.0,
            "changePercent": 1.1
        }))
        .unwrap();

        assert_eq!(quote.id, "btc");
        assert_eq!(quote.price, Some(70000.0));
        assert_eq!(quote.change_percent, Some(1.1));
    }

    #[test]
    fn missing_and_null_numbers_become_none() {
        let quote: Quote = serde_json::from_value(json!({
            "id": "vix",
            "label": "VIX",
            "price": null
        }))
        .unwrap();

        assert_eq!(quote.price, None);
        assert_eq!(quote.change_percent, None);
    }

    #[test]
    fn non_numeric_price_becomes_none() {
        let quote: Quote = serde_json::from_value(json!({
            "id": "sp500",
            "label": "S&P 500",
            "price": "n/a",
            "changePercent": -0.4
        }))
        .unwrap();

        assert_eq!(quote.price, None);
        assert_eq!(quote.change_percent, Some(-0.4));
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let snapshot = MarketSnapshot::default();
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value, json!({ "quotes": [], "fetchedAt": null }));
    }
}
