//! Answer fetcher: pick candidate links, load their pages, pull out a fragment

use crate::client::PageSource;
use crate::error::{HowdoiError, Result};
use crate::request::Request;
use crate::selectors::{self, text_of, SelectorChain};
use scraper::Html;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Shown when a page has no answer container
pub const NO_ANSWER: &str = "< no answer given >";

/// Text extracted for one candidate link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Code { text: String },
    FullText { text: String, link: String },
    Link { url: String },
    NoAnswer,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Code { text } => write!(f, "{}", text),
            Fragment::FullText { text, link } => {
                write!(f, "{} \n----\n Answer from {}", text, link)
            }
            Fragment::Link { url } => write!(f, "{}", url),
            Fragment::NoAnswer => write!(f, "{}", NO_ANSWER),
        }
    }
}

/// One ordinal block in multi-answer mode
#[derive(Debug, Serialize)]
pub struct AnswerBlock {
    /// 1-based
    pub ordinal: usize,
    pub link: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// What the fetcher produced for a request
#[derive(Debug)]
pub enum Answers {
    Single(Fragment),
    Many(Vec<AnswerBlock>),
}

impl Answers {
    pub fn failed(&self) -> usize {
        match self {
            Answers::Single(_) => 0,
            Answers::Many(blocks) => blocks.iter().filter(|b| !b.ok).count(),
        }
    }
}

/// Resolve the request against the candidate links.
///
/// Single-answer mode is fatal on fetch failure; multi-answer mode records
/// each link's outcome and only fails when every link failed.
pub async fn fetch_answers<S: PageSource>(
    source: &S,
    links: &[String],
    request: &Request,
) -> Result<Answers> {
    if links.is_empty() {
        return Err(HowdoiError::NoSearchResults);
    }

    if request.num_answers == 1 {
        let link = &links[select_index(links.len(), request.position)];
        if request.show_link_only {
            return Ok(Answers::Single(Fragment::Link { url: link.clone() }));
        }
        let fragment = fetch_answer(source, link, request.show_full_text).await?;
        return Ok(Answers::Single(fragment));
    }

    if links.len() < request.num_answers {
        log::warn!(
            "Asked for {} answers but only {} link(s) found",
            request.num_answers,
            links.len()
        );
    }

    let mut blocks = Vec::with_capacity(request.num_answers.min(links.len()));
    for (i, link) in links.iter().take(request.num_answers).enumerate() {
        let block = match fetch_answer(source, link, request.show_full_text).await {
            Ok(fragment) => AnswerBlock {
                ordinal: i + 1,
                link: link.clone(),
                ok: true,
                fragment: Some(fragment),
                err: None,
            },
            Err(e) => {
                log::warn!("Answer {} failed: {}", i + 1, e);
                AnswerBlock {
                    ordinal: i + 1,
                    link: link.clone(),
                    ok: false,
                    fragment: None,
                    err: Some(e.to_string()),
                }
            }
        };
        blocks.push(block);
    }

    let failed = blocks.iter().filter(|b| !b.ok).count();
    if failed == blocks.len() {
        return Err(HowdoiError::AllFetchesFailed { failed });
    }
    Ok(Answers::Many(blocks))
}

/// 0-based index for a 1-based position; past the end clamps to the last link
pub fn select_index(len: usize, position: usize) -> usize {
    let wanted = position.max(1) - 1;
    if wanted >= len {
        log::warn!(
            "Position {} is out of range, using last result ({})",
            position,
            len
        );
        len.saturating_sub(1)
    } else {
        wanted
    }
}

/// Link with the highest-voted-first ordering requested
pub fn answer_url(link: &str) -> String {
    match Url::parse(link) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("answertab", "votes");
            url.to_string()
        }
        Err(_) => format!("{}?answertab=votes", link),
    }
}

async fn fetch_answer<S: PageSource>(source: &S, link: &str, full_text: bool) -> Result<Fragment> {
    let url = answer_url(link);
    let html = source.fetch(&url).await?;
    Ok(extract_fragment(&html, &url, full_text))
}

/// Pull the answer fragment from a question page
pub fn extract_fragment(html: &str, link: &str, full_text: bool) -> Fragment {
    let doc = Html::parse_document(html);
    let Some(answers) = SelectorChain::new(selectors::ANSWER).select_document(&doc) else {
        return Fragment::NoAnswer;
    };
    let answer = answers[0];

    if !full_text {
        let text = SelectorChain::new(selectors::CODE)
            .select_within(answer)
            .map(|nodes| text_of(&nodes[0]))
            .unwrap_or_default();
        return Fragment::Code { text };
    }

    let text = SelectorChain::new(selectors::ANSWER_BODY)
        .select_within(answer)
        .map(|children| children.iter().map(text_of).collect::<Vec<_>>().join("\n"))
        .unwrap_or_default();
    Fragment::FullText {
        text,
        link: link.to_string(),
    }
}
