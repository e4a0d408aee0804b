use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Search term to look up
    #[arg(required_unless_present = "html_file")]
    pub query: Option<String>,

    /// Parse a saved results page instead of fetching one
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Search URL with a {query} placeholder for the encoded term
    #[arg(
        long,
        env = "LISTING_URL_TEMPLATE",
        default_value = "https://search.books.com.tw/search/query/key/{query}/cat/all"
    )]
    pub url_template: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[arg(
        long,
        default_value = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
    )]
    pub user_agent: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Title column width in terminal cells
    #[arg(long, default_value_t = 60)]
    pub title_width: usize,

    /// Discount column width in terminal cells
    #[arg(long, default_value_t = 16)]
    pub discount_width: usize,

    /// Price column width in terminal cells
    #[arg(long, default_value_t = 8)]
    pub price_width: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
