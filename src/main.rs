use crate::config::cli::OutputFormat;
use crate::config::Config;
use crate::error::{ListingError, Result};
use crate::infrastructure::SearchClient;
use crate::services::pipeline::ListingPipeline;
use crate::services::render::{write_json, TableRenderer};
use crate::services::search::SearchService;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let pipeline = ListingPipeline::new()?;

    let records = match &config.args.html_file {
        Some(path) => {
            info!("Parsing saved page {}", path.display());
            pipeline.run_markup(&Config::load_markup(path)?)
        }
        None => {
            let term = config.args.query.as_deref().ok_or(ListingError::MissingQuery)?;
            let client = SearchClient::new(config.http_client.clone(), &config.args.url_template)?;
            SearchService::new(client, pipeline).search(term).await
        }
    };

    let mut out = std::io::stdout().lock();
    match config.args.format {
        OutputFormat::Table => {
            TableRenderer::new(config.column_widths()).render(&records, &mut out)?;
        }
        OutputFormat::Json => write_json(&records, &mut out)?,
    }

    info!("Scraping completed successfully!");
    Ok(())
}
