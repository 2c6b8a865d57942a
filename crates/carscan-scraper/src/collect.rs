//! Run-level orchestration: every configured query, one after another, into
//! a single append-only dataset.

use std::time::Duration;

use carscan_core::{RawListing, SearchCriteria, VehicleQuery};

use crate::extract::ListingExtractor;
use crate::fetcher::PageFetcher;
use crate::pagination::paginate;
use crate::query::SearchSite;

/// Raw listings accumulated over a run. Only ever appended to while
/// scraping, then consumed whole by normalization.
#[derive(Debug, Default)]
pub struct RawDataset {
    listings: Vec<RawListing>,
}

impl RawDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, listings: impl IntoIterator<Item = RawListing>) {
        self.listings.extend(listings);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RawListing] {
        &self.listings
    }

    #[must_use]
    pub fn into_listings(self) -> Vec<RawListing> {
        self.listings
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectSettings {
    /// Wait after every page fetch before its content is read.
    pub settle_delay: Duration,
}

/// Scrapes every query in order and returns everything found.
///
/// A query whose first page cannot be fetched is logged and contributes no
/// listings; the remaining queries still run.
pub async fn collect_listings<F, E>(
    fetcher: &F,
    extractor: &E,
    site: &SearchSite,
    queries: &[VehicleQuery],
    criteria: &SearchCriteria,
    settings: &CollectSettings,
) -> RawDataset
where
    F: PageFetcher,
    E: ListingExtractor,
{
    let mut dataset = RawDataset::new();
    let mut failed_queries = 0usize;

    for query in queries {
        tracing::info!(make = %query.make, model = %query.model, "searching");
        let request = site.build_request(query, criteria);

        match paginate(fetcher, extractor, &request, query, settings.settle_delay, &mut dataset).await {
            Ok(found) => {
                tracing::info!(make = %query.make, model = %query.model, found, "query complete");
            }
            Err(e) => {
                failed_queries += 1;
                tracing::error!(
                    make = %query.make,
                    model = %query.model,
                    error = %e,
                    "query aborted: first results page could not be fetched"
                );
            }
        }
    }

    if failed_queries > 0 {
        tracing::warn!(
            failed_queries,
            total_queries = queries.len(),
            "some queries failed during collection"
        );
    }
    tracing::info!(total = dataset.len(), "collection finished");

    dataset
}
