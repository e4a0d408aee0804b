use super::Selectors;
use crate::domain::RawItemBlock;
use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Cuts a results page into per-listing blocks.
pub struct ItemSegmenter;

impl ItemSegmenter {
    /// Tries the primary item selector, then the fallback. An empty result is
    /// a valid outcome and is only reported as a warning.
    pub fn segment(&self, document: &Html, selectors: &Selectors) -> Vec<RawItemBlock> {
        let blocks = collect_blocks(document, &selectors.item_primary);
        if !blocks.is_empty() {
            debug!("Matched {} items with {}", blocks.len(), Selectors::ITEM_PRIMARY);
            return blocks;
        }

        let blocks = collect_blocks(document, &selectors.item_fallback);
        if !blocks.is_empty() {
            debug!("Matched {} items with {}", blocks.len(), Selectors::ITEM_FALLBACK);
            return blocks;
        }

        warn!(
            "No listing items found with {} or {}, check the item selectors",
            Selectors::ITEM_PRIMARY,
            Selectors::ITEM_FALLBACK
        );
        Vec::new()
    }
}

fn collect_blocks(document: &Html, selector: &Selector) -> Vec<RawItemBlock> {
    document
        .select(selector)
        .map(|element| RawItemBlock::new(element.html()))
        .collect()
}
