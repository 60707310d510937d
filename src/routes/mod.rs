//! HTTP route handlers for the demo API.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! Fully static content (landing page, info descriptor) is cacheable; the
//! hello endpoint carries a request-time timestamp and the actuator endpoints
//! feed liveness probes, so neither gets a cache header.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod actuator;
pub mod hello;
pub mod home;
pub mod info;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_INFO};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Landing page - fixed HTML, long cache
    let home_routes = Router::new().route("/", get(home::home)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Info descriptor - static per process, short cache
    let info_routes = Router::new().route("/api/info", get(info::info)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INFO),
        ),
    );

    // Hello - fresh timestamp per request, never cached
    let hello_routes = Router::new().route("/api/hello", get(hello::hello));

    // Actuator - no caching, always fresh for liveness probes
    let actuator_routes = Router::new()
        .route("/actuator", get(actuator::index))
        .route("/actuator/health", get(actuator::health));

    Router::new()
        .merge(home_routes)
        .merge(info_routes)
        .merge(hello_routes)
        .merge(actuator_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
