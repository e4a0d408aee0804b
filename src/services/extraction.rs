use crate::domain::{ExtractionResult, RawItemBlock, TitleVerdict};
use crate::infrastructure::{PriceExtractor, Selectors, TitleExtractor};
use tracing::debug;

/// Pulls title, discount and price out of one item block.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(&self, block: &RawItemBlock, selectors: &Selectors) -> ExtractionResult {
        let fragment = block.parse();

        let title = TitleExtractor.extract(&fragment, selectors);
        if let TitleVerdict::Excluded(cause) = &title {
            // Price markup of excluded listings is never read.
            debug!("Skipping price extraction for excluded listing: {:?}", cause);
            return ExtractionResult::excluded(*cause);
        }

        let fields = PriceExtractor.extract(&fragment, selectors);
        if fields.discount.is_sentinel() && fields.price.is_sentinel() {
            debug!("No discount or price for {:?} ({:?} tier)", title.text(), fields.tier);
        }

        ExtractionResult {
            title,
            discount: fields.discount,
            price: fields.price,
        }
    }
}
