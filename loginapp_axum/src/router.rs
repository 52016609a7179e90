//! Combined router for the session gateway

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use loginapp::Providers;

use crate::dispatcher::SessionDispatcher;
use crate::health::health;

/// Create the router serving the session endpoint at `/` and a liveness probe at `/health`
///
/// Every request is traced at INFO level with its headers and latency.
pub fn loginapp_router(providers: Providers) -> Router {
    loginapp_router_no_trace(providers).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `loginapp_router()` but without the HTTP tracing middleware.
pub fn loginapp_router_no_trace(providers: Providers) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(SessionDispatcher::new(providers).into_router())
}
