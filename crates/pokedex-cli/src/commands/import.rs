//! Bulk import from a JSON seed file.

use clap::Args;
use tracing::info;

use pokedex_core::config::AppConfig;
use pokedex_core::error::AppError;
use pokedex_database::seed::{import_records, read_seed_file};

use crate::output;

/// Arguments for `import`
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of records
    pub file: String,
    /// Skip records whose id already exists instead of failing
    #[arg(long)]
    pub skip_existing: bool,
}

/// Execute `import`
pub async fn execute(args: &ImportArgs, config: &AppConfig) -> Result<(), AppError> {
    let records = read_seed_file(&args.file).await?;
    info!(file = %args.file, count = records.len(), "Read seed file");

    let store = super::open_store(config).await?;
    let report = import_records(store.as_ref(), records, &config.catalog, args.skip_existing).await?;

    output::print_success(&format!(
        "Imported {} records ({} skipped)",
        report.inserted, report.skipped
    ));
    Ok(())
}
