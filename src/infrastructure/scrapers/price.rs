use super::{descendant_texts, element_text, price_container, Selectors};
use crate::domain::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

static PRICE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+[\d,]*)").unwrap());
static DISCOUNT_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*折").unwrap());
static PRICE_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+[\d,]*)\s*元").unwrap());

/// Which strategy produced the discount and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    /// `<b>` elements inside the price container.
    Structured,
    /// Regex scan over the container's text.
    FreeText,
    /// No price container in the block.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFields {
    pub discount: FieldValue,
    pub price: FieldValue,
    pub tier: PriceTier,
}

pub struct PriceExtractor;

impl PriceExtractor {
    pub fn extract(&self, block: &Html, selectors: &Selectors) -> PriceFields {
        let Some(container) = price_container(block, selectors) else {
            debug!("No price container, marking discount and price unavailable");
            return PriceFields {
                discount: FieldValue::Unavailable,
                price: FieldValue::Unavailable,
                tier: PriceTier::Absent,
            };
        };

        let bolds = descendant_texts(container, &selectors.bold);
        match bolds.as_slice() {
            [] => free_text_fields(container),
            // A lone bold value is read as the price, never the discount.
            [price] => PriceFields {
                discount: FieldValue::NotFound,
                price: FieldValue::text(price.as_str()),
                tier: PriceTier::Structured,
            },
            [discount, price, ..] => PriceFields {
                discount: FieldValue::text(discount.as_str()),
                price: FieldValue::text(
                    strip_separators(price).unwrap_or_else(|| price.clone()),
                ),
                tier: PriceTier::Structured,
            },
        }
    }
}

fn free_text_fields(container: ElementRef<'_>) -> PriceFields {
    let text = element_text(container);

    let discount = DISCOUNT_TEXT
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| FieldValue::text(m.as_str()))
        .unwrap_or(FieldValue::NotFound);

    let price = PRICE_TEXT
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| FieldValue::text(m.as_str().replace(',', "")))
        .unwrap_or(FieldValue::NotFound);

    PriceFields {
        discount,
        price,
        tier: PriceTier::FreeText,
    }
}

/// First run of digits and thousands separators, with the separators removed.
pub fn strip_separators(text: &str) -> Option<String> {
    PRICE_DIGITS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(',', ""))
}
