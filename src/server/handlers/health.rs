//! Probe handlers.
//!
//! - `/live`: process liveness only
//! - `/health`: build metadata as JSON (`GET`) or headers only (`HEAD`, `OPTIONS`)

use crate::GIT_COMMIT_HASH;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Health {
    pub commit: String,
    pub name: String,
    pub version: String,
}

/// Report process liveness.
pub async fn live() -> impl IntoResponse {
    StatusCode::OK
}

/// Report name, version and build commit.
pub async fn health(method: Method) -> impl IntoResponse {
    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&app_header(&health.commit)) {
        headers.insert("X-App", value);
    }

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    (headers, body)
}

fn app_header(commit: &str) -> String {
    let short_hash = if commit.len() > 7 { &commit[0..7] } else { "" };
    format!(
        "{}:{}:{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_hash
    )
}
