//! Search request construction.
//!
//! A [`SearchSite`] is validated once at startup; building a request for a
//! make/model pair from it is pure and infallible.

use carscan_core::{SearchCriteria, VehicleQuery};
use reqwest::Url;

use crate::error::ScraperError;

const SEARCH_PATH: &str = "/car-search";

/// The listing site's origin, e.g. `https://www.autotrader.co.uk`.
#[derive(Debug, Clone)]
pub struct SearchSite {
    base: Url,
    origin: String,
}

impl SearchSite {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `origin` is not an absolute
    /// `http`/`https` URL.
    pub fn new(origin: &str) -> Result<Self, ScraperError> {
        let base = Url::parse(origin).map_err(|e| ScraperError::InvalidUrl {
            url: origin.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ScraperError::InvalidUrl {
                url: origin.to_owned(),
                reason: format!("unsupported scheme \"{}\"", base.scheme()),
            });
        }
        let origin = base.origin().ascii_serialization();
        Ok(Self { base, origin })
    }

    /// Scheme + host (+ port) with no trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Builds the canonical search request for one make/model pair.
    #[must_use]
    pub fn build_request(&self, query: &VehicleQuery, criteria: &SearchCriteria) -> SearchRequest {
        let mut url = self.base.clone();
        url.set_path(SEARCH_PATH);
        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .append_pair("advertising-location", "at_cars")
            .append_pair("include-delivery-option", "on")
            .append_pair("make", &query.make)
            .append_pair("model", &query.model)
            .append_pair("postcode", &criteria.postcode)
            .append_pair("radius", &criteria.radius)
            .append_pair("sort", "relevance")
            .append_pair("year-from", &criteria.year_from)
            .append_pair("year-to", &criteria.year_to)
            .append_pair("price-from", &criteria.price_from)
            .append_pair("price-to", &criteria.price_to);
        SearchRequest { url }
    }
}

/// A search for one make/model pair, without a page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    url: Url,
}

impl SearchRequest {
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// The same request with a 1-based `page` parameter appended.
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url.into()
    }
}
