/// Configuration management for Timeline Service
///
/// Loads configuration from environment variables.
use db_pool::DbConfig;

use crate::error::{ServiceError, ServiceResult};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port for health checks
    pub http_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServiceResult<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8087), // timeline-service default HTTP port
        };

        let database = DbConfig::from_env("timeline-service").map_err(ServiceError::Config)?;

        Ok(Config { app, database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_default_values() {
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::remove_var("APP_ENV");
        std::env::remove_var("APP_HOST");
        std::env::remove_var("PORT");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.http_port, 8087);
        assert_eq!(config.database.service_name, "timeline-service");
        assert_eq!(config.database.max_connections, 20);
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_database_url_is_config_error() {
        std::env::remove_var("DATABASE_URL");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    #[serial_test::serial]
    fn test_port_override() {
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::set_var("PORT", "9090");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.http_port, 9090);

        std::env::remove_var("PORT");
    }
}
