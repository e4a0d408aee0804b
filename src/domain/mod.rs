mod exclusion;
mod listing;

pub use exclusion::ExclusionPhrase;
pub use listing::{
    ExclusionCause, ExtractionResult, FieldValue, ListingRecord, RawItemBlock, TitleVerdict,
};
