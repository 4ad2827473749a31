//! Runtime configuration shared by the search and fetch steps

use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com";
pub const DEFAULT_SITE: &str = "stackoverflow.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for a howdoi run
#[derive(Debug, Clone)]
pub struct Config {
    /// Search engine base URL, without the `/search` path
    pub search_url: String,
    /// Q&A site the search is restricted to
    pub site: String,
    /// Deadline for each HTTP request
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            site: DEFAULT_SITE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
