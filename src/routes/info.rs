//! Application information endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::ApplicationConfig;
use crate::state::AppState;

/// One advertised endpoint in the info descriptor.
#[derive(Debug, Serialize)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Response body for `GET /api/info`. Fully static per process lifetime
/// except `application` and `version`, which come from configuration.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: String,
    pub version: String,
    pub technologies: Vec<&'static str>,
    pub description: String,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl InfoResponse {
    fn new(app: &ApplicationConfig) -> Self {
        Self {
            application: app.name.clone(),
            version: app.version.clone(),
            technologies: vec!["Java 17", "Spring Boot", "Maven", "Spring Boot Actuator"],
            description: "Complete CI/CD pipeline demonstration with Java Spring Boot".to_string(),
            endpoints: vec![
                EndpointDescriptor {
                    path: "/actuator/health",
                    method: "GET",
                    description: "Health check via Spring Boot Actuator",
                },
                EndpointDescriptor {
                    path: "/api/hello",
                    method: "GET",
                    description: "Hello world message",
                },
                EndpointDescriptor {
                    path: "/api/info",
                    method: "GET",
                    description: "Application information",
                },
                EndpointDescriptor {
                    path: "/actuator",
                    method: "GET",
                    description: "Spring Boot Actuator endpoints",
                },
            ],
        }
    }
}

/// Application information handler.
#[instrument(name = "info::info", skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::new(&state.config.app))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_exactly_four_endpoints() {
        let response = InfoResponse::new(&ApplicationConfig::default());
        assert_eq!(response.endpoints.len(), 4);
        for endpoint in &response.endpoints {
            assert!(!endpoint.path.is_empty());
            assert!(!endpoint.method.is_empty());
            assert!(!endpoint.description.is_empty());
        }
    }

    #[test]
    fn application_and_version_come_from_config() {
        let app = ApplicationConfig {
            name: "POC3 Test".to_string(),
            version: "9.9.9".to_string(),
            environment: "production".to_string(),
        };
        let response = InfoResponse::new(&app);
        assert_eq!(response.application, "POC3 Test");
        assert_eq!(response.version, "9.9.9");
    }

    #[test]
    fn technology_list_is_nonempty() {
        let response = InfoResponse::new(&ApplicationConfig::default());
        assert!(!response.technologies.is_empty());
    }
}
