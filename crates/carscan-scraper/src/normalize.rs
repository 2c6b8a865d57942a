//! Normalization from [`RawListing`] to [`NormalizedListing`].
//!
//! Every coercion is soft: text that does not parse becomes `None` or
//! [`Reading::Unknown`], and each input produces exactly one output in the
//! same position.

use std::sync::LazyLock;

use carscan_core::{NormalizedListing, RawListing, Reading};
use regex::Regex;

/// Trailing registration-period suffix such as `" (12 reg)"`.
static REG_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid reg suffix regex"));

/// Normalizes a full scrape, preserving order and length.
///
/// `origin` is prefixed to site-relative detail links; `current_year` drives
/// the miles-per-year derivation.
#[must_use]
pub fn normalize_listings(
    raw: Vec<RawListing>,
    origin: &str,
    current_year: i32,
) -> Vec<NormalizedListing> {
    raw.into_iter()
        .map(|listing| normalize_listing(listing, origin, current_year))
        .collect()
}

/// Normalizes one listing.
#[must_use]
pub fn normalize_listing(raw: RawListing, origin: &str, current_year: i32) -> NormalizedListing {
    let price = raw.price_text.as_deref().and_then(parse_price);
    let year = raw.year_text.as_deref().and_then(parse_year);
    let mileage = raw.mileage_text.as_deref().and_then(parse_mileage);

    NormalizedListing {
        name: raw.name,
        link: absolute_link(origin, &raw.detail_link),
        price,
        year,
        mileage,
        miles_per_year: miles_per_year(mileage, year, current_year),
        owners: raw.owners_text.as_deref().map_or(Reading::Unknown, parse_owners),
        distance: raw.distance_text.as_deref().map_or(Reading::Unknown, parse_distance),
        location: raw.location,
        engine: raw.engine_text,
        transmission: raw.transmission,
        fuel: raw.fuel,
    }
}

/// `"£4,500"` → `4500`.
fn parse_price(text: &str) -> Option<u32> {
    text.replace(['£', ','], "").trim().parse().ok()
}

/// `"2012 (12 reg)"` → `2012`.
fn parse_year(text: &str) -> Option<i32> {
    REG_SUFFIX_RE.replace(text, "").trim().parse().ok()
}

/// `"45,000 miles"` → `45000`.
fn parse_mileage(text: &str) -> Option<u32> {
    let cleaned = text.replace(',', "");
    cleaned
        .trim()
        .trim_end_matches("miles")
        .trim_end_matches("mile")
        .trim()
        .parse()
        .ok()
}

/// Leading digits of the owner text: `"2"` or `"2 owners"` → `2`.
fn parse_owners(text: &str) -> Reading {
    let text = text.trim_start();
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    Reading::from(text[..digits_end].parse::<u32>().ok())
}

/// `"(5 miles)"` → `5`. Text before the opening parenthesis is ignored.
fn parse_distance(text: &str) -> Reading {
    let after_paren = text.split_once('(').map_or(text, |(_, rest)| rest);
    let digits = after_paren
        .trim()
        .trim_end_matches(')')
        .trim_end()
        .trim_end_matches("miles")
        .trim_end_matches("mile")
        .trim();
    Reading::from(digits.parse::<u32>().ok())
}

/// Average annual mileage, truncated. `0` when either input is missing or
/// the car is from the current year (or later).
fn miles_per_year(mileage: Option<u32>, year: Option<i32>, current_year: i32) -> u32 {
    let (Some(mileage), Some(year)) = (mileage, year) else {
        return 0;
    };
    match u32::try_from(current_year.saturating_sub(year)) {
        Ok(age) if age > 0 => mileage / age,
        _ => 0,
    }
}

fn absolute_link(origin: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_owned();
    }
    let origin = origin.trim_end_matches('/');
    if link.starts_with('/') {
        format!("{origin}{link}")
    } else {
        format!("{origin}/{link}")
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
