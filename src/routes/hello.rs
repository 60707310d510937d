//! Hello world endpoint.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::config::SERVICE_NAME;
use crate::state::AppState;

/// Fixed greeting, kept byte-for-byte from the original demo.
const HELLO_MESSAGE: &str = "Hello World from Java Spring Boot POC3!";

/// Response body for `GET /api/hello`. Constructed fresh per request; the
/// timestamp is request-time "now" in RFC 3339 UTC.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
    pub service: String,
}

impl HelloResponse {
    fn now(environment: &str) -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: environment.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Hello world handler.
#[instrument(name = "hello::hello", skip(state))]
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse::now(&state.config.app.environment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn response_carries_fixed_message_and_service() {
        let response = HelloResponse::now("development");
        assert_eq!(response.message, "Hello World from Java Spring Boot POC3!");
        assert_eq!(response.service, "java-springboot-api");
        assert_eq!(response.environment, "development");
    }

    #[test]
    fn timestamp_is_rfc3339_and_recent() {
        let response = HelloResponse::now("development");
        let parsed = DateTime::parse_from_rfc3339(&response.timestamp).unwrap();
        let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 5);
    }
}
