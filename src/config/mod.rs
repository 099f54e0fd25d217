//! Configuration module for the career ladder backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("LADDER_DB_PATH")
            .unwrap_or_else(|_| "./data/ladder.sqlite".to_string())
            .into();

        let raw_bind_addr =
            env::var("LADDER_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_bind_addr.parse().map_err(|e| {
            AppError::Internal(format!(
                "Invalid LADDER_BIND_ADDR '{}': {}",
                raw_bind_addr, e
            ))
        })?;

        let log_level = env::var("LADDER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Only test in the crate that touches the environment.
        env::remove_var("LADDER_DB_PATH");
        env::remove_var("LADDER_BIND_ADDR");
        env::remove_var("LADDER_LOG_LEVEL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/ladder.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");

        env::set_var("LADDER_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LADDER_BIND_ADDR"));
        env::remove_var("LADDER_BIND_ADDR");
    }
}
