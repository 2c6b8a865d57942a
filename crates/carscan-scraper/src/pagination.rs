//! Page-count discovery and the per-query fetch/extract loop.
//!
//! The results page shows a `"Page X of N"` label. The first page of a query
//! is fetched only to read `N`; pages `1..=N` are then fetched with an
//! explicit `page` parameter and run through the extractor.
//!
//! ## Failure policy
//!
//! - A fetch failure on the first page aborts the query: the error is
//!   returned and nothing is appended.
//! - A missing page-count label means the query matched nothing. This is
//!   logged and returns `Ok(0)`.
//! - A fetch failure on any later page skips that page only.
//! - Listing-level failures never surface here; the extractor drops them.
//!
//! Fetches are never retried.

use std::sync::LazyLock;
use std::time::Duration;

use carscan_core::VehicleQuery;
use regex::Regex;
use scraper::{Html, Selector};

use crate::collect::RawDataset;
use crate::error::ScraperError;
use crate::extract::ListingExtractor;
use crate::fetcher::PageFetcher;
use crate::query::SearchRequest;

static PARAGRAPH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static PAGE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Page\s+\d+\s+of\s+(\d+)").expect("valid page count regex"));

/// Reads `N` from the first `<p>` whose text contains `"Page X of N"`.
///
/// Returns `None` when no such label exists, which the site does when a
/// search has no results.
#[must_use]
pub fn parse_page_count(html: &str) -> Option<u32> {
    let document = Html::parse_document(html);
    document.select(&PARAGRAPH_SEL).find_map(|p| {
        let text: String = p.text().collect();
        PAGE_COUNT_RE
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    })
}

/// Fetches every page of `request` and appends extracted listings to
/// `dataset`, waiting `settle_delay` after each fetch attempt, failed or not.
///
/// Returns the number of listings appended.
///
/// # Errors
///
/// Returns the fetch error if the first page cannot be retrieved. Later
/// page failures are logged and skipped.
pub async fn paginate<F, E>(
    fetcher: &F,
    extractor: &E,
    request: &SearchRequest,
    query: &VehicleQuery,
    settle_delay: Duration,
    dataset: &mut RawDataset,
) -> Result<usize, ScraperError>
where
    F: PageFetcher,
    E: ListingExtractor,
{
    let first_page = fetcher.fetch(request.url()).await;
    settle(settle_delay).await;
    let first_page = first_page?;

    let Some(page_count) = parse_page_count(&first_page) else {
        tracing::info!(make = %query.make, model = %query.model, "no results found");
        return Ok(0);
    };
    tracing::info!(make = %query.make, model = %query.model, pages = page_count, "found result pages");

    let mut appended = 0usize;
    for page in 1..=page_count {
        let url = request.page_url(page);
        let fetched = fetcher.fetch(&url).await;
        settle(settle_delay).await;

        let html = match fetched {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    make = %query.make,
                    model = %query.model,
                    page,
                    error = %e,
                    "failed to fetch result page, skipping"
                );
                continue;
            }
        };

        let listings = extractor.extract(&html, query);
        tracing::info!(
            make = %query.make,
            model = %query.model,
            page,
            listings = listings.len(),
            "page scraped"
        );
        appended += listings.len();
        dataset.extend(listings);
    }

    Ok(appended)
}

async fn settle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
