//! Shared fixtures for unit tests: an in-memory [`PageFetcher`] and
//! builders for results-page markup.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::ScraperError;
use crate::fetcher::PageFetcher;

/// Serves canned pages by exact URL and records every request in order.
/// Unknown URLs and URLs registered with [`FakeFetcher::fail`] return
/// [`ScraperError::Fetch`].
#[derive(Default)]
pub(crate) struct FakeFetcher {
    pages: HashMap<String, String>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub(crate) fn fail(mut self, url: impl Into<String>) -> Self {
        self.failing.push(url.into());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.calls.lock().unwrap().push(url.to_owned());
        if self.failing.iter().any(|u| u == url) {
            return Err(ScraperError::Fetch {
                url: url.to_owned(),
                reason: "simulated navigation failure".to_owned(),
            });
        }
        self.pages.get(url).cloned().ok_or_else(|| ScraperError::Fetch {
            url: url.to_owned(),
            reason: "no canned page".to_owned(),
        })
    }
}

/// Markup for one seller listing block.
pub(crate) fn listing_block(price: &str, link: &str, seller: Option<&str>, specs: &[&str]) -> String {
    let seller = seller
        .map(|s| format!(r#"<p data-testid="search-listing-seller">{s}</p>"#))
        .unwrap_or_default();
    let specs: String = specs.iter().map(|s| format!("<li>{s}</li>")).collect();
    format!(
        r#"<section data-testid="trader-seller-listing">
  <a href="{link}"><h3>Listing</h3></a>
  <div><span>{price}</span></div>
  {seller}
  <ul data-testid="search-listing-specs">{specs}</ul>
</section>"#
    )
}

/// A full results page wrapping `blocks`, with an optional
/// `"Page X of N"` indicator.
pub(crate) fn results_page(indicator: Option<(u32, u32)>, blocks: &[String]) -> String {
    let indicator = indicator
        .map(|(page, total)| format!("<p>Page {page} of {total}</p>"))
        .unwrap_or_default();
    format!(
        "<html><body><main>{}</main><footer>{indicator}</footer></body></html>",
        blocks.concat()
    )
}
