use crate::domain::{ExtractionResult, FieldValue, ListingRecord};

pub const DISCOUNT_UNIT: &str = "折";
pub const PRICE_UNIT: &str = "元";

/// Appends `unit` to the field text. Sentinels get the unit too ("N/A元").
pub fn format_label(value: &FieldValue, unit: &str) -> String {
    format!("{}{}", value.display_text(), unit)
}

pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn normalize(&self, result: &ExtractionResult) -> ListingRecord {
        ListingRecord {
            title: result.title.text().to_string(),
            discount_label: format_label(&result.discount, DISCOUNT_UNIT),
            price_label: format_label(&result.price, PRICE_UNIT),
            excluded: result.title.is_excluded(),
        }
    }
}
