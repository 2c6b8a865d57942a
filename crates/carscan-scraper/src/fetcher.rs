//! The page-fetching boundary.
//!
//! [`PageFetcher`] is the only way the pipeline reaches the network. The
//! pagination loop owns the settle delay, so implementations just return
//! whatever markup the URL currently renders to.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Returns rendered markup for a URL.
pub trait PageFetcher {
    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns a [`ScraperError`] when the page cannot be retrieved; the
    /// caller decides whether that aborts the query or skips the page.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// Plain HTTP fetcher for result pages that are served pre-rendered.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-GB,en;q=0.9")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
