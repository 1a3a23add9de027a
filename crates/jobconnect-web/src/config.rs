//! Service configuration loaded from environment variables.

use std::env;

use jobconnect_infra::DatabaseConfig;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables, using `default_port`
    /// when `PORT` is unset or invalid.
    pub fn from_env(default_port: u16) -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
                min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(default_port),
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
