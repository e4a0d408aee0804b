use crate::config::cli::Args;
use crate::error::Result;
use crate::services::render::ColumnWidths;
use clap::Parser;
use reqwest::Client;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(args.user_agent.as_str())
            .build()?;

        Ok(Self { args, http_client })
    }

    /// Unknown levels fall back to `info`.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.args.log_level).unwrap_or(Level::INFO)
    }

    pub fn column_widths(&self) -> ColumnWidths {
        ColumnWidths {
            title: self.args.title_width,
            discount: self.args.discount_width,
            price: self.args.price_width,
        }
    }

    pub fn load_markup(path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}
