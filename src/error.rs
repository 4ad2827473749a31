//! Error taxonomy for the question → answer pipeline

/// Errors that can occur while answering a question
#[derive(Debug, thiserror::Error)]
pub enum HowdoiError {
    /// Question was empty after sanitization
    #[error("Input not valid: the question is empty")]
    InvalidInput,

    /// Search page had no result links, or none pointed to a question
    #[error("No results found")]
    NoSearchResults,

    /// HTTP request could not be completed
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A result node's href could not be parsed as a URL
    #[error("Malformed link {href:?}")]
    MalformedLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// Configured search URL is unusable
    #[error("Invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Every answer page in a multi-answer request failed to load
    #[error("Could not get any of the {failed} answers. Please try again later")]
    AllFetchesFailed { failed: usize },
}

pub type Result<T> = std::result::Result<T, HowdoiError>;
