use super::{first_match, Selectors};
use crate::domain::{ExclusionCause, ExclusionPhrase, TitleVerdict};
use scraper::Html;

pub struct TitleExtractor;

impl TitleExtractor {
    /// Reads the `title` attribute of the first anchor that has one.
    pub fn extract(&self, block: &Html, selectors: &Selectors) -> TitleVerdict {
        let Some(anchor) = first_match(block, &selectors.title_anchor) else {
            return TitleVerdict::Excluded(ExclusionCause::MissingAnchor);
        };

        // Phrases match the raw attribute; only listed titles are trimmed.
        let title = anchor.value().attr("title").unwrap_or_default();
        match ExclusionPhrase::match_title(title) {
            Some(phrase) => TitleVerdict::Excluded(ExclusionCause::Phrase(phrase)),
            None => TitleVerdict::Listed(title.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(markup: &str) -> TitleVerdict {
        let selectors = Selectors::new().unwrap();
        TitleExtractor.extract(&Html::parse_fragment(markup), &selectors)
    }

    #[test]
    fn takes_first_titled_anchor() {
        let verdict = extract(
            r#"<a href="/cover"><img src="c.jpg"></a>
               <a href="/item/1" title=" 我和班上第二可愛的女生成為朋友 (1) ">link</a>
               <a href="/item/2" title="Second">other</a>"#,
        );
        assert_eq!(
            verdict,
            TitleVerdict::Listed("我和班上第二可愛的女生成為朋友 (1)".to_string())
        );
    }

    #[test]
    fn missing_anchor_is_excluded() {
        let verdict = extract(r#"<a href="/no-title">text only</a><span title="x">y</span>"#);
        assert_eq!(verdict, TitleVerdict::Excluded(ExclusionCause::MissingAnchor));
    }

    #[test]
    fn every_exclusion_phrase_is_excluded() {
        for phrase in ExclusionPhrase::ALL {
            let markup = format!(r#"<a href="/x" title="{}">btn</a>"#, phrase.as_str());
            assert_eq!(
                extract(&markup),
                TitleVerdict::Excluded(ExclusionCause::Phrase(phrase))
            );
        }
    }

    #[test]
    fn padded_phrase_is_listed() {
        for phrase in ExclusionPhrase::ALL {
            let markup = format!(r#"<a href="/x" title=" {} ">btn</a>"#, phrase.as_str());
            assert_eq!(
                extract(&markup),
                TitleVerdict::Listed(phrase.as_str().to_string())
            );
        }
    }

    #[test]
    fn anchor_text_does_not_stand_in_for_title() {
        let verdict = extract(r#"<a href="/x" title="Real Title">下次再買</a>"#);
        assert_eq!(verdict, TitleVerdict::Listed("Real Title".to_string()));
    }
}
