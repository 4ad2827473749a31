//! Output formatter: turn fetched answers into the printed text

use crate::answer::{AnswerBlock, Answers};
use serde::Serialize;

/// Multi-answer JSON wrapper
#[derive(Debug, Serialize)]
pub struct AnswerResults<'a> {
    pub answers: &'a [AnswerBlock],
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
}

/// Header put in front of each block in multi-answer mode
pub fn ordinal_header(ordinal: usize) -> String {
    format!("==== Answer {} ====\n", ordinal)
}

/// Plain-text rendering, without the trailing newline
pub fn render(answers: &Answers) -> String {
    match answers {
        Answers::Single(fragment) => fragment.to_string(),
        Answers::Many(blocks) => {
            let mut out = String::new();
            for block in blocks {
                out.push_str(&ordinal_header(block.ordinal));
                match (&block.fragment, &block.err) {
                    (Some(fragment), _) => out.push_str(fragment.to_string().trim_end()),
                    (None, Some(err)) => {
                        out.push_str(&format!("< failed to fetch answer: {} >", err))
                    }
                    (None, None) => {}
                }
                out.push('\n');
            }
            out.trim_end().to_string()
        }
    }
}

/// JSON rendering: the bare fragment for one answer, a results object for many
pub fn render_json(answers: &Answers) -> serde_json::Result<String> {
    match answers {
        Answers::Single(fragment) => serde_json::to_string_pretty(fragment),
        Answers::Many(blocks) => {
            let failed = answers.failed();
            serde_json::to_string_pretty(&AnswerResults {
                answers: blocks,
                total: blocks.len(),
                ok: blocks.len() - failed,
                failed,
            })
        }
    }
}
