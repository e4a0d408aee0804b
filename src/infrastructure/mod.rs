mod clients;
mod scrapers;

pub use clients::search::SearchClient;
pub use scrapers::{
    price::PriceExtractor,
    segmenter::ItemSegmenter,
    title::TitleExtractor,
    Selectors,
};
