use crate::domain::{ListingRecord, RawItemBlock};
use crate::error::Result;
use crate::infrastructure::{ItemSegmenter, Selectors};
use crate::services::extraction::FieldExtractor;
use crate::services::normalize::RecordNormalizer;
use scraper::Html;
use tracing::info;

/// Page in, records out. Holds nothing between runs except the parsed
/// selectors.
pub struct ListingPipeline {
    selectors: Selectors,
}

impl ListingPipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }

    pub fn segment(&self, document: &Html) -> Vec<RawItemBlock> {
        ItemSegmenter.segment(document, &self.selectors)
    }

    /// One record per block, in block order. Excluded listings are kept.
    pub fn run_document(&self, document: &Html) -> Vec<ListingRecord> {
        let blocks = self.segment(document);

        let records: Vec<ListingRecord> = blocks
            .iter()
            .map(|block| {
                let extracted = FieldExtractor.extract(block, &self.selectors);
                RecordNormalizer.normalize(&extracted)
            })
            .collect();

        let excluded = records.iter().filter(|record| record.excluded).count();
        info!(
            "Extracted {} records from {} blocks ({} excluded)",
            records.len(),
            blocks.len(),
            excluded
        );

        records
    }

    pub fn run_markup(&self, markup: &str) -> Vec<ListingRecord> {
        self.run_document(&Html::parse_document(markup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>搜尋結果</title></head>
<body>
  <div class="table-td">
    <h4><a href="/item/1" title="我和班上第二可愛的女生成為朋友 (1)">...</a></h4>
    <ul class="price"><li>優惠價: <b>9</b> 折, <b>126</b> 元</li></ul>
  </div>
  <div class="table-td">
    <h4><a href="/item/2" title="我和班上第二可愛的女生成為朋友 (2) 特裝版">...</a></h4>
    <ul class="price"><li>特價: 8 折, 1,299 元</li></ul>
  </div>
  <div class="table-td">
    <a href="/buy-later" title="下次再買">下次再買</a>
    <ul class="price"><li><b>7</b><b>99</b></li></ul>
  </div>
  <div class="table-td">
    <h4><a href="/item/3" title="Short Stories">...</a></h4>
    <ul class="price"><li>電子書定價: <b>69</b> 元</li></ul>
  </div>
  <div class="table-td">
    <h4><a href="/item/4" title="Preorder Only">...</a></h4>
  </div>
  <div class="table-td"><img src="ad.png"></div>
</body></html>"#;

    fn pipeline() -> ListingPipeline {
        ListingPipeline::new().unwrap()
    }

    #[test]
    fn one_record_per_block_in_order() {
        let pipeline = pipeline();
        let document = Html::parse_document(RESULTS_PAGE);

        let blocks = pipeline.segment(&document);
        let records = pipeline.run_document(&document);
        assert_eq!(blocks.len(), 6);
        assert_eq!(records.len(), blocks.len());

        let rows: Vec<(&str, &str, &str, bool)> = records
            .iter()
            .map(|r| {
                (
                    r.title.as_str(),
                    r.discount_label.as_str(),
                    r.price_label.as_str(),
                    r.excluded,
                )
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("我和班上第二可愛的女生成為朋友 (1)", "9折", "126元", false),
                ("我和班上第二可愛的女生成為朋友 (2) 特裝版", "8折", "1299元", false),
                ("下次再買", "N/A折", "N/A元", true),
                ("Short Stories", "N/A折", "69元", false),
                ("Preorder Only", "N/A折", "N/A元", false),
                ("", "N/A折", "N/A元", true),
            ]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let item = r#"<div class="box"><a title="Same">x</a><ul class="price"><li><b>9</b><b>1</b></li></ul></div>"#;
        let records = pipeline().run_markup(&format!("<body>{item}{item}</body>"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn page_without_items_yields_no_records() {
        let records = pipeline().run_markup("<html><body><p>查無資料</p></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn empty_markup_yields_no_records() {
        assert!(pipeline().run_markup("").is_empty());
    }

    #[test]
    fn runs_are_independent() {
        let pipeline = pipeline();
        let first = pipeline.run_markup(RESULTS_PAGE);
        let _ = pipeline.run_markup("<p>nothing</p>");
        let again = pipeline.run_markup(RESULTS_PAGE);
        assert_eq!(first, again);
    }
}
