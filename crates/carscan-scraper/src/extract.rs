//! Listing extraction from a rendered results page.
//!
//! Each seller listing is a `<section data-testid="trader-seller-listing">`.
//! Within a block, price and detail link are required; every other field is
//! best-effort and left empty when the markup does not cooperate.

use std::sync::LazyLock;

use carscan_core::{RawListing, VehicleQuery};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::classify::{classify_spec, SpecField};
use crate::error::ScraperError;

static LISTING_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"section[data-testid="trader-seller-listing"]"#).expect("valid selector")
});
static DETAIL_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="/car-details/"]"#).expect("valid selector"));
static SELLER_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"p[data-testid="search-listing-seller"]"#).expect("valid selector")
});
static SPEC_ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"ul[data-testid="search-listing-specs"] li"#).expect("valid selector")
});

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£\d+(,\d{3})?").expect("valid price regex"));

const DEALER_LOCATION_LABEL: &str = "Dealer location";

/// Turns one results page into raw listings.
pub trait ListingExtractor {
    /// Never fails as a whole: blocks that cannot be used are skipped.
    fn extract(&self, page: &str, query: &VehicleQuery) -> Vec<RawListing>;
}

/// Extractor for the seller-listing markup served by the search results page.
#[derive(Debug, Default, Clone, Copy)]
pub struct SellerListingExtractor;

impl ListingExtractor for SellerListingExtractor {
    fn extract(&self, page: &str, query: &VehicleQuery) -> Vec<RawListing> {
        let document = Html::parse_document(page);

        document
            .select(&LISTING_SEL)
            .enumerate()
            .filter_map(|(idx, block)| match extract_block(block, query) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!(
                        make = %query.make,
                        model = %query.model,
                        block = idx,
                        error = %e,
                        "skipping listing"
                    );
                    None
                }
            })
            .collect()
    }
}

/// Extracts a single listing block.
///
/// # Errors
///
/// Returns [`ScraperError::ListingRejected`] when the block has no
/// currency-prefixed price or no detail-page link.
fn extract_block(block: ElementRef<'_>, query: &VehicleQuery) -> Result<RawListing, ScraperError> {
    let text: String = block.text().collect();

    let price_text = PRICE_RE
        .find(&text)
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| ScraperError::ListingRejected {
            reason: "no price found".to_owned(),
        })?;

    let detail_link = block
        .select(&DETAIL_LINK_SEL)
        .find_map(|a| a.value().attr("href"))
        .map(str::to_owned)
        .ok_or_else(|| ScraperError::ListingRejected {
            reason: "no detail link found".to_owned(),
        })?;

    let mut listing = RawListing {
        name: query.label(),
        price_text: Some(price_text),
        detail_link,
        ..RawListing::default()
    };

    match block.select(&SELLER_SEL).next().map(|p| p.text().collect::<String>()) {
        Some(seller) => {
            if let Some((location, distance)) = parse_seller(&seller) {
                listing.location = location;
                listing.distance_text = Some(distance);
            } else {
                tracing::debug!(seller = %seller.trim(), "seller location not recognised");
            }
        }
        None => tracing::debug!(link = %listing.detail_link, "seller information not found"),
    }

    for item in block.select(&SPEC_ITEM_SEL) {
        let spec: String = item.text().collect();
        let Some((field, value)) = classify_spec(&spec) else {
            continue;
        };
        let slot = match field {
            SpecField::Year => &mut listing.year_text,
            SpecField::Mileage => &mut listing.mileage_text,
            SpecField::Transmission => &mut listing.transmission,
            SpecField::Engine => &mut listing.engine_text,
            SpecField::Fuel => &mut listing.fuel,
            SpecField::Owners => &mut listing.owners_text,
        };
        *slot = Some(value);
    }

    Ok(listing)
}

/// Splits seller text such as `"Trade sellerDealer locationLeeds (5 miles)"`
/// into a place name and the parenthesised distance,
/// `(Some("Leeds"), "(5 miles)")`. A blank place name still yields the
/// distance.
///
/// Returns `None` when the label, the opening parenthesis or the distance
/// is missing.
fn parse_seller(text: &str) -> Option<(Option<String>, String)> {
    let (_, remainder) = text.split_once(DEALER_LOCATION_LABEL)?;
    let (place, distance) = remainder.split_once('(')?;
    let distance = distance.split(')').next().unwrap_or(distance).trim();
    if distance.is_empty() {
        return None;
    }
    let place = Some(place.trim()).filter(|p| !p.is_empty()).map(str::to_owned);
    Some((place, format!("({distance})")))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
