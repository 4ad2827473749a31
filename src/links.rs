//! Link extractor: search the Q&A site and collect candidate answer pages

use crate::client::PageSource;
use crate::config::Config;
use crate::error::{HowdoiError, Result};
use crate::selectors::{self, SelectorChain};
use scraper::Html;
use url::Url;

/// Substring a target link must contain to count as a question page
pub const QUESTION_MARKER: &str = "question";

/// `<base>/search?q=site:<site>%20<question>`; `question` is already escaped
pub fn search_url(config: &Config, question: &str) -> String {
    format!(
        "{}/search?q=site:{}%20{}",
        config.search_url.trim_end_matches('/'),
        config.site,
        question
    )
}

/// Run the search and return candidate links in document order
pub async fn find_links<S: PageSource>(
    source: &S,
    config: &Config,
    question: &str,
) -> Result<Vec<String>> {
    let url = search_url(config, question);
    let base = Url::parse(&url).map_err(|source| HowdoiError::InvalidUrl {
        url: url.clone(),
        source,
    })?;

    let html = source.fetch(&url).await?;
    parse_result_links(&html, &base)
}

/// Pull candidate links out of a search results page.
///
/// Fails with `NoSearchResults` only when neither result selector matches;
/// a page whose links are all filtered out yields an empty list.
pub fn parse_result_links(html: &str, base: &Url) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let nodes = SelectorChain::new(selectors::RESULT_LINKS)
        .select_document(&doc)
        .ok_or(HowdoiError::NoSearchResults)?;

    let mut links = Vec::new();
    for node in nodes {
        let Some(href) = node.value().attr("href") else {
            continue;
        };
        match target_link(href, base) {
            Ok(link) if link.contains(QUESTION_MARKER) => links.push(link),
            Ok(link) => log::debug!("Ignoring non-question link {}", link),
            Err(e) => log::warn!("{}, skipping", e),
        }
    }

    log::debug!("Found {} candidate link(s)", links.len());
    Ok(links)
}

/// Unwrap the search engine's redirect: the real target sits in `q`.
/// Hrefs without `q` are taken as direct links.
pub fn target_link(href: &str, base: &Url) -> Result<String> {
    let parsed = base
        .join(href)
        .map_err(|source| HowdoiError::MalformedLink {
            href: href.to_string(),
            source,
        })?;

    let target = parsed
        .query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| parsed.to_string());
    Ok(target)
}
