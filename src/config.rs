//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, default paths, and fixed response strings. `AppConfig` is
//! the root configuration struct. A missing config file is not an error; the
//! service runs on defaults, matching the original demo which needs no
//! external configuration to start.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches. All values are in seconds.
// Only the fully static routes are cacheable; /api/hello carries a fresh
// timestamp and the actuator endpoints must stay uncached for probes.

/// Landing page - fixed HTML, changes only on deploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 3600;

/// Info descriptor - static per process lifetime
pub const HTTP_CACHE_INFO_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

pub const CACHE_CONTROL_INFO: &str = formatcp!("public, max-age={}", HTTP_CACHE_INFO_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "poc3_api=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Active environment when neither the config file nor APP_ENVIRONMENT set one
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment variable that overrides the configured environment name
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Service identifier reported by /api/hello
pub const SERVICE_NAME: &str = "java-springboot-api";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Application identity and active environment
    pub app: ApplicationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Application identity settings surfaced through /api/hello and /api/info
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Display name reported by /api/info
    pub name: String,
    /// Version string, defaults to the crate version
    #[serde(skip_deserializing, default = "ApplicationConfig::default_version")]
    pub version: String,
    /// Active environment/profile name (e.g. "development", "production")
    pub environment: String,
}

impl ApplicationConfig {
    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "POC3 Java Spring Boot Hello World".to_string(),
            version: Self::default_version(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, falling back to defaults when the
    /// file does not exist. The `APP_ENVIRONMENT` variable, when set, wins
    /// over the file's environment value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.apply_environment_override(std::env::var(ENVIRONMENT_VAR).ok());
        Ok(config)
    }

    /// Replaces the configured environment with the given override, if any.
    fn apply_environment_override(&mut self, environment: Option<String>) {
        if let Some(env) = environment.filter(|e| !e.is_empty()) {
            self.app.environment = env;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_file_absent() {
        let config = AppConfig::load("/nonexistent/poc3.toml").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.app.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn loads_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "127.0.0.1"
port = 9090

[app]
name = "POC3 Test"
environment = "production"

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.app.name, "POC3 Test");
        assert_eq!(config.app.environment, "production");
        assert_eq!(config.logging.format, "json");
        // version always comes from the build, never the file
        assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http]\nport = 3000\n").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.app.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http\nport = ???\n").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn environment_override_wins_over_file_value() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();

        config.apply_environment_override(Some("staging".to_string()));
        assert_eq!(config.app.environment, "staging");
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_environment_override(Some(String::new()));
        assert_eq!(config.app.environment, DEFAULT_ENVIRONMENT);

        config.apply_environment_override(None);
        assert_eq!(config.app.environment, DEFAULT_ENVIRONMENT);
    }
}
