//! Actuator-style operational endpoints.
//!
//! Reproduces the Spring Boot Actuator surface the original demo advertises:
//! a health probe and an index of available actuator links. Used by
//! Kubernetes, ECS, systemd, and load balancers to verify the service is
//! alive.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Health probe response, matching the Spring Actuator contract.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to
/// HTTP, so the status is unconditionally "UP".
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

/// Actuator index handler listing the available operational endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "_links": {
            "self": { "href": "/actuator", "templated": false },
            "health": { "href": "/actuator/health", "templated": false },
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_up() {
        let Json(body) = health().await;
        assert_eq!(body.status, "UP");
    }

    #[tokio::test]
    async fn index_links_to_health() {
        let Json(body) = index().await;
        assert_eq!(body["_links"]["health"]["href"], "/actuator/health");
        assert_eq!(body["_links"]["self"]["href"], "/actuator");
    }
}
