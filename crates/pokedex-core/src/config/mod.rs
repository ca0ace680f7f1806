//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `POKEDEX__*` environment variables. Each
//! sub-module represents a logical configuration section, and every
//! section has defaults so the service can start without any files.

pub mod app;
pub mod catalog;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::catalog::CatalogConfig;
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Catalog behavior (pagination, images, seeding).
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay and
    /// environment variables prefixed with `POKEDEX__`. Missing files are
    /// not an error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("POKEDEX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.database.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.default_page_size, 20);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load_from("does-not-exist", "nowhere").unwrap();
        assert_eq!(config.database.provider, StoreProvider::Postgres);
        assert_eq!(config.logging.level, "info");
    }
}
