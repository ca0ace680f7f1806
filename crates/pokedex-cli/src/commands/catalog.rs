//! Read-only catalog commands: list, show, search.

use clap::Args;

use pokedex_core::config::AppConfig;
use pokedex_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    /// Records per page
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// `list`: one page ordered by id
pub async fn list(args: &ListArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let service = super::open_service(config).await?;
    let page = args.page.to_string();
    let limit = args.limit.map(|l| l.to_string());
    let request = service.page_request(Some(&page), limit.as_deref());

    let result = service.list(request).await?;
    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => {
            output::print_records(&result.items, format);
            println!(
                "Page {}/{} ({} records)",
                result.page, result.total_pages, result.total
            );
        }
    }
    Ok(())
}

/// `show <id>`
pub async fn show(id: i64, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let service = super::open_service(config).await?;
    let pokemon = service.get(id).await?;
    output::print_record(&pokemon, format);
    Ok(())
}

/// `search <term>`
pub async fn search(term: &str, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let service = super::open_service(config).await?;
    let records = service.search(Some(term)).await?;
    output::print_records(&records, format);
    Ok(())
}
