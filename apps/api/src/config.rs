//! Server configuration.
//!
//! Values are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `barber.toml` in the working directory (optional)
//! 3. `BARBER_*` environment variables (`BARBER_PORT=8080`)

use std::net::SocketAddr;
use std::path::PathBuf;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use barber_db::DbConfig;

/// Default config file name, looked up without extension.
pub const CONFIG_FILE: &str = "barber";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BARBER";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port (default: 3000)
    pub port: u16,

    /// SQLite database file (default: ./database.sqlite)
    pub database_path: PathBuf,

    /// Pool size (default: 5)
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            database_path: PathBuf::from("./database.sqlite"),
            max_connections: 5,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `barber.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads configuration using `file` as the optional config file name.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let config: ServerConfig = Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_path", defaults.database_path.display().to_string())?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would only fail later at bind or pool time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("database_path".to_string()));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// The address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("bind_addr".to_string()))
    }

    /// Pool settings for this server.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
        assert_eq!(config.db_config().max_connections, 5);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ServerConfig::load_from("does-not-exist-barber-config").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("./database.sqlite"));
    }

    #[test]
    fn test_rejects_zero_port_and_pool() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(k)) if k == "port"));

        let config = ServerConfig {
            max_connections: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(k)) if k == "max_connections"
        ));
    }

    #[test]
    fn test_rejects_bad_bind_addr() {
        let config = ServerConfig {
            bind_addr: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
