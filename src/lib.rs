//! howdoi: instant coding answers from the command line
//!
//! Pipeline:
//! - query: sanitize the question into a search query
//! - links: search the Q&A site and collect question links
//! - answer: fetch the selected answer pages and extract code or full text
//! - output: render the fragments as text or JSON

pub mod answer;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod links;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod request;
pub mod selectors;

pub use answer::{AnswerBlock, Answers, Fragment, NO_ANSWER};
pub use client::{HttpClient, PageSource};
pub use config::Config;
pub use error::{HowdoiError, Result};
pub use request::Request;
