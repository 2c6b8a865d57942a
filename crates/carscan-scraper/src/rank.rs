use carscan_core::{NormalizedListing, SearchCriteria};

/// Keeps listings priced strictly below the criteria's `price_to` and sorts
/// them nearest first.
///
/// Listings without a price are always dropped. If `price_to` is not a whole
/// number no ceiling is applied. The sort is stable and unknown distances
/// sort ahead of every known one.
#[must_use]
pub fn filter_and_rank(
    listings: Vec<NormalizedListing>,
    criteria: &SearchCriteria,
) -> Vec<NormalizedListing> {
    let ceiling = criteria.price_ceiling();
    if ceiling.is_none() {
        tracing::warn!(
            price_to = %criteria.price_to,
            "price_to is not a whole number; no price ceiling applied"
        );
    }

    let mut ranked: Vec<NormalizedListing> = listings
        .into_iter()
        .filter(|l| match (l.price, ceiling) {
            (Some(price), Some(ceiling)) => price < ceiling,
            (Some(_), None) => true,
            (None, _) => false,
        })
        .collect();

    ranked.sort_by_key(|l| l.distance);
    ranked
}
