use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    /// Client setup, transport failure, timeout or non-success status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Could not read or write page data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not encode records as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid CSS selector: {0}")]
    Selector(String),
    #[error("URL template {0:?} has no {{query}} placeholder")]
    UrlTemplate(String),
    #[error("Invalid progress template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
    #[error("No search term given")]
    MissingQuery,
}

pub type Result<T> = std::result::Result<T, ListingError>;
