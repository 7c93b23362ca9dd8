use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use std::sync::Arc;
use std::{io, net::SocketAddr};
use tokio::net::TcpListener;

use routers::route;

use crate::models::market::MarketCache;

mod routers;

pub async fn run_server(cache: Arc<MarketCache>, port: u16) -> Result<(), io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let cache = Arc::clone(&cache);

        tokio::task::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| route(req, Arc::clone(&cache)));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Failed to serve connection: {:?}", err);
            }
        });
    }
}
