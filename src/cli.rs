//! Command-line surface

use crate::config::{Config, DEFAULT_SEARCH_URL, DEFAULT_SITE, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::request::Request;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "howdoi")]
#[command(version, disable_version_flag = true, allow_negative_numbers = true)]
#[command(about = "Instant coding answers from the command line")]
#[command(long_about = "Searches a Q&A site for your question and prints the code from the top answer.\n\nExample:\n  howdoi format date bash\n  howdoi -n 3 reverse a list in python")]
pub struct Cli {
    /// The question to answer
    #[arg(value_name = "QUESTION")]
    pub question: Vec<String>,

    /// Select answer in specified position
    #[arg(short, long, default_value_t = 1)]
    pub pos: i64,

    /// Display the full text of the answer
    #[arg(short, long)]
    pub all: bool,

    /// Display only the answer link
    #[arg(short, long)]
    pub link: bool,

    /// Number of answers to return
    #[arg(short, long = "num-answers", default_value_t = 1)]
    pub num_answers: i64,

    /// Print answers as JSON
    #[arg(long)]
    pub json: bool,

    /// Q&A site to search
    #[arg(long, env = "HOWDOI_SITE", default_value = DEFAULT_SITE)]
    pub site: String,

    /// Search engine base URL
    #[arg(long, env = "HOWDOI_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Timeout per request in seconds
    #[arg(long, env = "HOWDOI_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub fn request(&self) -> Request {
        Request::new(
            self.question.clone(),
            self.pos,
            self.num_answers,
            self.all,
            self.link,
        )
    }

    pub fn config(&self) -> Config {
        Config {
            search_url: self.search_url.clone(),
            site: self.site.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
