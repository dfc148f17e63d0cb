//! Standalone HTTP host for the greeting handlers.
//!
//! Decodes axum requests into `greeter_core::HttpRequest`, runs the matching
//! handler, and writes the `GreetingResult` back as a `text/plain` response.
//! Each request runs on its own tokio task; nothing is shared between them.

pub mod config;
pub mod logging;

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Query,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use greeter_core::{GreetingResult, HttpMethod, HttpRequest};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.route("httpget"), get(httpget))
        .route(&config.route("httppost"), post(httppost))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, config: &ServerConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

/// Binds `config.addr()` and serves until the process exits.
pub async fn serve(config: ServerConfig) -> Result<(), std::io::Error> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        get = %config.route("httpget"),
        post = %config.route("httppost"),
        "listening"
    );
    run(listener, &config).await
}

async fn httpget(uri: Uri, Query(query): Query<BTreeMap<String, String>>) -> Response {
    let request = HttpRequest {
        method: HttpMethod::Get,
        path: uri.path().to_string(),
        query,
        body: None,
    };
    respond(greeter_core::greet_by_query(&request))
}

async fn httppost(uri: Uri, body: Bytes) -> Response {
    let request = HttpRequest {
        method: HttpMethod::Post,
        path: uri.path().to_string(),
        query: BTreeMap::new(),
        body: (!body.is_empty()).then(|| body.to_vec()),
    };
    respond(greeter_core::greet_by_body(&request))
}

fn respond(result: GreetingResult) -> Response {
    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, result.body).into_response()
}
