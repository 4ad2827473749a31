//! HTTP page fetching

use crate::config::Config;
use crate::error::{HowdoiError, Result};

/// Something that can GET a page and hand back its body
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest` backed page source with a per-request deadline
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|source| HowdoiError::Transport {
                url: config.search_url.clone(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl PageSource for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| HowdoiError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(HowdoiError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|source| HowdoiError::Transport {
            url: url.to_string(),
            source,
        })
    }
}
