use bytes::Bytes;
use http_body_util::Full;
use hyper::{Request, Response};
use std::sync::Arc;

use crate::models::market::MarketCache;

pub async fn handle_get_indices(
    req: Request<hyper::body::Incoming>,
    cache: Arc<MarketCache>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let force_refresh = wants_refresh(req.uri().query());
    let current = cache.snapshot();

    // an empty cache means no successful fetch yet; try one inline
    let snapshot = if force_refresh || current.quotes.is_empty() {
        cache.refresh().await
    } else {
        current
    };

    let body = serde_json::to_string(&snapshot.quotes).unwrap_or_else(|_| "[]".to_string());
    let mut builder = Response::builder().header("Content-Type", "application/json");

    if let Some(fetched_at) = &snapshot.fetched_at {
        builder = builder.header("X-Cache-Timestamp", fetched_at.as_str());
    }

    Ok(builder.body(Full::new(Bytes::from(body))).unwrap())
}

fn wants_refresh(query: Option<&str>) -> bool {
    query
        .map(|q| q.split('&').any(|pair| pair == "refresh=1"))
        .unwrap_or(false)
}
