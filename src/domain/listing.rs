use super::ExclusionPhrase;
use scraper::Html;
use serde::Serialize;

/// Markup of one candidate listing, cut out of the results page in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItemBlock {
    markup: String,
}

impl RawItemBlock {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn parse(&self) -> Html {
        Html::parse_fragment(self.markup())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionCause {
    MissingAnchor,
    Phrase(ExclusionPhrase),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleVerdict {
    Listed(String),
    Excluded(ExclusionCause),
}

impl TitleVerdict {
    pub fn is_excluded(&self) -> bool {
        matches!(self, TitleVerdict::Excluded(_))
    }

    /// Text kept on the record: the real title, the matched phrase, or
    /// nothing when the block had no title anchor at all.
    pub fn text(&self) -> &str {
        match self {
            TitleVerdict::Listed(title) => title,
            TitleVerdict::Excluded(ExclusionCause::Phrase(phrase)) => phrase.as_str(),
            TitleVerdict::Excluded(ExclusionCause::MissingAnchor) => "",
        }
    }
}

/// A discount or price as pulled from the block.
///
/// `Unavailable` means the price container was missing entirely, while
/// `NotFound` means the container was there but no tier matched inside it.
/// `Withheld` is used for excluded listings, whose price markup is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    NotFound,
    Unavailable,
    Withheld,
}

impl FieldValue {
    pub const SENTINEL_TEXT: &'static str = "N/A";

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, FieldValue::Text(_))
    }

    pub fn display_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::NotFound | FieldValue::Unavailable | FieldValue::Withheld => {
                Self::SENTINEL_TEXT
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub title: TitleVerdict,
    pub discount: FieldValue,
    pub price: FieldValue,
}

impl ExtractionResult {
    pub fn excluded(cause: ExclusionCause) -> Self {
        Self {
            title: TitleVerdict::Excluded(cause),
            discount: FieldValue::Withheld,
            price: FieldValue::Withheld,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub title: String,
    pub discount_label: String,
    pub price_label: String,
    pub excluded: bool,
}
