//! CLI command definitions and dispatch.

pub mod catalog;
pub mod config;
pub mod import;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use pokedex_core::config::AppConfig;
use pokedex_core::error::AppError;
use pokedex_database::{RecordStore, connect_store};
use pokedex_service::PokemonService;

use crate::output::OutputFormat;

/// Environment variable selecting the configuration overlay.
const ENV_VAR: &str = "POKEDEX_ENV";

/// Pokedex catalog administration
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (defaults to $POKEDEX_ENV, then "development")
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import records from a JSON file
    Import(import::ImportArgs),
    /// List one page of the catalog
    List(catalog::ListArgs),
    /// Show a single record
    Show {
        /// Record id
        id: i64,
    },
    /// Search names in every language
    Search {
        /// Substring to look for
        term: String,
    },
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let env = self.environment();
        match &self.command {
            Commands::Import(args) => import::execute(args, &self.load_config(&env)?).await,
            Commands::List(args) => {
                catalog::list(args, &self.load_config(&env)?, self.format).await
            }
            Commands::Show { id } => catalog::show(*id, &self.load_config(&env)?, self.format).await,
            Commands::Search { term } => {
                catalog::search(term, &self.load_config(&env)?, self.format).await
            }
            Commands::Config(args) => config::execute(args, &self.config_dir, &env, self.format),
        }
    }

    fn environment(&self) -> String {
        self.env
            .clone()
            .or_else(|| std::env::var(ENV_VAR).ok())
            .unwrap_or_else(|| "development".to_string())
    }

    fn load_config(&self, env: &str) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config_dir, env)
    }
}

/// Helper: open the configured record store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>, AppError> {
    connect_store(&config.database).await
}

/// Helper: build the catalog service over the configured store
pub async fn open_service(config: &AppConfig) -> Result<PokemonService, AppError> {
    let store = open_store(config).await?;
    Ok(PokemonService::new(store, config.catalog.clone()))
}
