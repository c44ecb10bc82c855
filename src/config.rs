// src/config.rs
use crate::errors::{AppError, Result};

pub const DEFAULT_APP_VERSION: &str = "v2";
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration loaded from environment variables.
///
/// Deploy tooling injects `APP_VERSION` and `ENVIRONMENT` into the
/// container; every variable has a fallback so the service also runs
/// standalone with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment version label (`APP_VERSION`, default "v2").
    pub app_version: String,
    /// Environment name (`ENVIRONMENT`, default "production").
    pub environment: String,
    /// Bind host (`HOST`, default "0.0.0.0").
    pub host: String,
    /// Bind port (`PORT`, default 8000).
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing variable falls back to its default; a `PORT` that is set
    /// but not a valid port number is a configuration error.
    pub fn from_env() -> Result<Self> {
        let app_version = std::env::var("APP_VERSION")
            .unwrap_or_else(|_| DEFAULT_APP_VERSION.to_string());
        let environment = std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        Ok(AppConfig { app_version, environment, host, port })
    }

    /// Socket address string the HTTP server binds to.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Parse the `PORT` variable, falling back to the default when unset.
fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) => raw.parse::<u16>().map_err(|_| {
            AppError::Config(format!("PORT must be a number between 1 and 65535, got '{raw}'"))
        }),
        None => Ok(DEFAULT_PORT),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_version: DEFAULT_APP_VERSION.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app_version, "v2");
        assert_eq!(config.environment, "production");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_parse_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_accepts_valid_value() {
        assert_eq!(parse_port(Some("9000")).unwrap(), 9000);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let err = parse_port(Some("eight thousand")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("eight thousand"));
    }

    #[test]
    fn test_bind_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 9000));
    }
}
