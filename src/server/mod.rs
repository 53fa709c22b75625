//! Static server for the compiled web bundle.
//!
//! Files under the bundle directory are served as-is. Any other path gets the
//! index document so the client router can resolve it; that is what makes a
//! guarded route such as `/sale/buy-course/course/access?order_id=...`
//! loadable by direct entry or reload. The server knows nothing about
//! verification records; all gating happens in the browser.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, debug_span, info};
use ulid::Ulid;

mod handlers;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Location of the compiled bundle on disk.
#[derive(Debug, Clone)]
pub struct Bundle {
    dir: PathBuf,
    index: PathBuf,
}

impl Bundle {
    pub fn new(dir: PathBuf, index: &str) -> Self {
        let index = dir.join(index);
        Self { dir, index }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index(&self) -> &Path {
        &self.index
    }
}

/// Build the router: health endpoints first, then the bundle with index fallback.
#[must_use]
pub fn router(bundle: &Bundle) -> Router {
    let spa = ServeDir::new(bundle.dir()).fallback(ServeFile::new(bundle.index()));

    Router::new()
        .route(
            "/health",
            get(handlers::health::health).options(handlers::health::health),
        )
        .route("/live", get(handlers::health::live))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(REQUEST_ID_HEADER),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID_HEADER,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span)),
        )
}

/// Serve the bundle until the process receives ctrl-c.
/// # Errors
/// Returns an error if the listener cannot bind or the server fails
pub async fn new(port: u16, bundle: Bundle) -> Result<()> {
    let app = router(&bundle);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, request_id)
}
