use crate::domain::ListingRecord;
use crate::infrastructure::SearchClient;
use crate::services::pipeline::ListingPipeline;
use tracing::{error, info};

pub struct SearchService {
    client: SearchClient,
    pipeline: ListingPipeline,
}

impl SearchService {
    pub fn new(client: SearchClient, pipeline: ListingPipeline) -> Self {
        info!("Created new Search service");
        Self { client, pipeline }
    }

    /// Fetches the results page for `term` and runs it through the pipeline.
    /// A failed request is logged and yields no records.
    pub async fn search(&self, term: &str) -> Vec<ListingRecord> {
        let url = self.client.build_search_url(term);
        info!("Searching for {:?}", term);

        match self.client.fetch_page(&url).await {
            Ok(body) => self.pipeline.run_markup(&body),
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                Vec::new()
            }
        }
    }
}
