//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use pokedex_core::config::AppConfig;
use pokedex_core::error::AppError;
use pokedex_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_dir: &str,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = AppConfig::load_from(config_dir, env)?;
            config.database.url = mask_password(&config.database.url);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{config:#?}"),
            }
        }
        ConfigCommand::Validate => match AppConfig::load_from(config_dir, env) {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration '{config_dir}' ({env}) is valid"
                ));
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Store", &config.database.provider.to_string());
                output::print_kv("Database", &mask_password(&config.database.url));
                output::print_kv("Image URL", &config.catalog.image_url_template);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
