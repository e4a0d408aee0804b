use crate::error::{ListingError, Result};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod price;
pub(crate) mod segmenter;
pub(crate) mod title;

/// Every CSS selector the extractors rely on, parsed once per pipeline.
pub struct Selectors {
    pub item_primary: Selector,
    pub item_fallback: Selector,
    pub title_anchor: Selector,
    pub price_list: Selector,
    pub price_item: Selector,
    pub bold: Selector,
}

impl Selectors {
    pub const ITEM_PRIMARY: &'static str = "div.table-td";
    pub const ITEM_FALLBACK: &'static str = "div.box";
    pub const TITLE_ANCHOR: &'static str = "a[title]";
    pub const PRICE_LIST: &'static str = "ul.price";
    pub const PRICE_ITEM: &'static str = "li";
    pub const BOLD: &'static str = "b";

    pub fn new() -> Result<Self> {
        Ok(Self {
            item_primary: parse_selector(Self::ITEM_PRIMARY)?,
            item_fallback: parse_selector(Self::ITEM_FALLBACK)?,
            title_anchor: parse_selector(Self::TITLE_ANCHOR)?,
            price_list: parse_selector(Self::PRICE_LIST)?,
            price_item: parse_selector(Self::PRICE_ITEM)?,
            bold: parse_selector(Self::BOLD)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ListingError::Selector(e.to_string()))
}

/// First element in `html` matching `selector`, in document order.
pub fn first_match<'a>(html: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    html.select(selector).next()
}

/// First `li` of the first `ul.price`. Later price lists are never consulted.
pub fn price_container<'a>(block: &'a Html, selectors: &Selectors) -> Option<ElementRef<'a>> {
    first_match(block, &selectors.price_list)?
        .select(&selectors.price_item)
        .next()
}

/// All text below `element`, concatenated and trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of every descendant of `element` matching `selector`.
pub fn descendant_texts(element: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    element.select(selector).map(element_text).collect()
}
