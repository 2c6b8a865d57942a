//! The `search` command: scrape, normalize, rank, report.
//!
//! Query-level failures are contained inside `collect_listings`; only
//! startup problems (bad search file, bad origin, unwritable report) make
//! this command fail.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::Datelike;

use carscan_core::{AppConfig, SearchFile};
use carscan_scraper::{
    collect_listings, filter_and_rank, normalize_listings, CollectSettings, HttpPageFetcher,
    SearchSite, SellerListingExtractor,
};

use crate::report;

#[derive(Debug, Clone)]
pub(crate) struct SearchOptions {
    pub search_path: PathBuf,
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub open_output: bool,
}

/// Runs one full search and writes the ranked report.
///
/// With `dry_run` set, prints the first-page URL of every query and returns
/// without touching the network.
///
/// # Errors
///
/// Returns an error if the search file or site origin is invalid, the HTTP
/// client cannot be built, or the report cannot be written.
pub(crate) async fn run_search(config: &AppConfig, options: &SearchOptions) -> anyhow::Result<()> {
    let search = carscan_core::load_search_file(&options.search_path)
        .with_context(|| format!("failed to load search file {}", options.search_path.display()))?;
    let site = SearchSite::new(&config.site_origin)?;

    if options.dry_run {
        println!("dry-run: would search {} vehicles:", search.vehicles.len());
        for line in planned_requests(&site, &search) {
            println!("  {line}");
        }
        return Ok(());
    }

    let fetcher = HttpPageFetcher::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build page fetcher: {e}"))?;
    let settings = CollectSettings {
        settle_delay: Duration::from_millis(config.settle_delay_ms),
    };

    tracing::info!(
        vehicles = search.vehicles.len(),
        origin = %site.origin(),
        "starting search run"
    );
    let dataset = collect_listings(
        &fetcher,
        &SellerListingExtractor,
        &site,
        &search.vehicles,
        &search.criteria,
        &settings,
    )
    .await;
    println!("{} cars total found.", dataset.len());

    let current_year = chrono::Local::now().year();
    let normalized = normalize_listings(dataset.into_listings(), site.origin(), current_year);
    let ranked = filter_and_rank(normalized, &search.criteria);
    tracing::info!(kept = ranked.len(), "listings ranked");

    report::write_report(&ranked, &options.output_path)?;
    println!("Output saved to {}.", options.output_path.display());

    if options.open_output {
        if let Err(e) = open::that(&options.output_path) {
            tracing::warn!(
                path = %options.output_path.display(),
                error = %e,
                "could not open report"
            );
        }
    }

    Ok(())
}

/// `"<make> <model>: <url>"` for every vehicle, in search-file order.
pub(crate) fn planned_requests(site: &SearchSite, search: &SearchFile) -> Vec<String> {
    search
        .vehicles
        .iter()
        .map(|v| {
            let request = site.build_request(v, &search.criteria);
            format!("{}: {}", v.label(), request.url())
        })
        .collect()
}
