use bytes::Bytes;
use http_body_util::Full;
use hyper::StatusCode;
use hyper::{Request, Response};
use std::sync::Arc;

use crate::models::market::MarketCache;

mod markets;

pub async fn route(
    req: Request<hyper::body::Incoming>,
    cache: Arc<MarketCache>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    match (req.method(), req.uri().path()) {
        (&hyper::Method::GET, "/api/markets/indices") => {
            markets::handle_get_indices(req, cache).await
        }
        _ => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("Not Found")))
            .unwrap()),
    }
}
