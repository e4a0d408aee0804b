use crate::error::{ListingError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Fetches search result pages from a listing endpoint.
pub struct SearchClient {
    client: Client,
    url_template: String,
}

impl SearchClient {
    pub fn new(client: Client, url_template: impl Into<String>) -> Result<Self> {
        let url_template = url_template.into();
        if !url_template.contains(QUERY_PLACEHOLDER) {
            return Err(ListingError::UrlTemplate(url_template));
        }

        Ok(Self {
            client,
            url_template,
        })
    }

    pub fn build_search_url(&self, search_term: &str) -> String {
        let encoded_term = urlencoding::encode(search_term);
        self.url_template.replace(QUERY_PLACEHOLDER, &encoded_term)
    }

    /// Single GET, no retry. Non-success statuses are returned as errors.
    /// The body is always decoded as UTF-8, whatever charset is declared.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        spinner.set_message(format!("Fetching {url}"));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let body = self.request(url).await;
        spinner.finish_and_clear();

        let body = body?;
        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }

    async fn request(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKS_TEMPLATE: &str = "https://search.books.com.tw/search/query/key/{query}/cat/all";

    #[test]
    fn percent_encodes_term_into_template() {
        let client = SearchClient::new(Client::new(), BOOKS_TEMPLATE).unwrap();
        assert_eq!(
            client.build_search_url("朋友 1"),
            "https://search.books.com.tw/search/query/key/%E6%9C%8B%E5%8F%8B%201/cat/all"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let client = SearchClient::new(Client::new(), "http://example.test/?q={query}").unwrap();
        assert_eq!(
            client.build_search_url("a/b&c"),
            "http://example.test/?q=a%2Fb%26c"
        );
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let result = SearchClient::new(Client::new(), "https://example.test/search");
        assert!(matches!(result, Err(ListingError::UrlTemplate(_))));
        assert_eq!(
            result.err().unwrap().to_string(),
            r#"URL template "https://example.test/search" has no {query} placeholder"#
        );
    }
}
