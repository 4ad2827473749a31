//! Selector fallback chains
//!
//! An ordered list of CSS selectors tried in sequence. The first selector
//! that matches at least one node wins; when none match the lookup yields
//! `None`.

use scraper::{ElementRef, Html, Selector};

/// Result links on the search page
pub const RESULT_LINKS: &[&str] = &[".l", ".r a"];

/// Answer containers on a question page
pub const ANSWER: &[&str] = &[".answer"];

/// Code inside an answer, block code preferred over inline
pub const CODE: &[&str] = &["pre", "code"];

/// Direct children of the answer body wrapper
pub const ANSWER_BODY: &[&str] = &[".post-text > *", ".js-post-body > *", ".s-prose > *"];

pub struct SelectorChain {
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    /// Parse the chain. Patterns that fail to parse are left out.
    pub fn new(patterns: &[&'static str]) -> Self {
        let selectors = patterns
            .iter()
            .filter_map(|p| match Selector::parse(p) {
                Ok(sel) => Some((*p, sel)),
                Err(e) => {
                    log::warn!("Skipping invalid selector {:?}: {:?}", p, e);
                    None
                }
            })
            .collect();
        Self { selectors }
    }

    /// First non-empty match anywhere in the document
    pub fn select_document<'a>(&self, doc: &'a Html) -> Option<Vec<ElementRef<'a>>> {
        self.first_match(|sel| doc.select(sel).collect())
    }

    /// First non-empty match among the descendants of `root`
    pub fn select_within<'a>(&self, root: ElementRef<'a>) -> Option<Vec<ElementRef<'a>>> {
        self.first_match(|sel| root.select(sel).collect())
    }

    fn first_match<'a, F>(&self, mut lookup: F) -> Option<Vec<ElementRef<'a>>>
    where
        F: FnMut(&Selector) -> Vec<ElementRef<'a>>,
    {
        for (pattern, sel) in &self.selectors {
            let nodes = lookup(sel);
            if !nodes.is_empty() {
                log::debug!("Selector {:?} matched {} node(s)", pattern, nodes.len());
                return Some(nodes);
            }
        }
        None
    }
}

/// All text under an element, concatenated
pub fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_selector_wins() {
        let doc = Html::parse_document(r#"<a class="l">one</a><div class="r"><a>two</a></div>"#);
        let nodes = SelectorChain::new(RESULT_LINKS)
            .select_document(&doc)
            .unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(text_of(&nodes[0]), "one");
    }

    #[test]
    fn test_falls_back_to_next_selector() {
        let doc = Html::parse_document(
            r#"<div class="r"><a>two</a></div><div class="r"><a>three</a></div>"#,
        );
        let nodes = SelectorChain::new(RESULT_LINKS)
            .select_document(&doc)
            .unwrap();
        let texts: Vec<String> = nodes.iter().map(text_of).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }

    #[test]
    fn test_no_match() {
        let doc = Html::parse_document("<p>nothing</p>");
        assert!(SelectorChain::new(RESULT_LINKS)
            .select_document(&doc)
            .is_none());
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let doc = Html::parse_document("<pre>x</pre>");
        let nodes = SelectorChain::new(&["[[", "pre"])
            .select_document(&doc)
            .unwrap();
        assert_eq!(text_of(&nodes[0]), "x");
    }

    #[test]
    fn test_select_within_only_searches_descendants() {
        let doc = Html::parse_document(
            r#"<pre>outside</pre><div class="answer"><code>inside</code></div>"#,
        );
        let answer = SelectorChain::new(ANSWER).select_document(&doc).unwrap()[0];
        let code = SelectorChain::new(CODE).select_within(answer).unwrap();
        assert_eq!(text_of(&code[0]), "inside");
    }
}
