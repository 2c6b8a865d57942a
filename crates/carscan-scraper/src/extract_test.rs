use super::*;
use crate::test_support::{listing_block, results_page};

fn yaris() -> VehicleQuery {
    VehicleQuery::new("Toyota", "Yaris")
}

fn extract(page: &str) -> Vec<RawListing> {
    SellerListingExtractor.extract(page, &yaris())
}

// -----------------------------------------------------------------------
// Whole blocks
// -----------------------------------------------------------------------

#[test]
fn extracts_every_field_from_a_complete_block() {
    let block = listing_block(
        "£4,500",
        "/car-details/202401011234",
        Some("Trade seller<span>Dealer location</span>Leeds (5 miles)"),
        &["Hatchback", "2012 (12 reg)", "45,000 miles", "1.3L", "Manual", "Petrol", "2 owners"],
    );
    let listings = extract(&results_page(Some((1, 1)), &[block]));

    assert_eq!(
        listings,
        vec![RawListing {
            name: "Toyota Yaris".to_owned(),
            price_text: Some("£4,500".to_owned()),
            year_text: Some("2012 (12 reg)".to_owned()),
            mileage_text: Some("45,000 miles".to_owned()),
            transmission: Some("Manual".to_owned()),
            fuel: Some("Petrol".to_owned()),
            engine_text: Some("1.3L".to_owned()),
            owners_text: Some("2".to_owned()),
            location: Some("Leeds".to_owned()),
            distance_text: Some("(5 miles)".to_owned()),
            detail_link: "/car-details/202401011234".to_owned(),
        }]
    );
}

#[test]
fn spec_order_does_not_matter() {
    let forward = listing_block("£3,995", "/car-details/1", None, &["2011 (61 reg)", "60,100 miles", "Diesel"]);
    let reversed = listing_block("£3,995", "/car-details/1", None, &["Diesel", "60,100 miles", "2011 (61 reg)"]);
    let a = extract(&results_page(None, &[forward]));
    let b = extract(&results_page(None, &[reversed]));
    assert_eq!(a, b);
    assert_eq!(a[0].fuel.as_deref(), Some("Diesel"));
}

#[test]
fn block_without_price_is_skipped() {
    let priced = listing_block("£5,250", "/car-details/1", None, &[]);
    let unpriced = listing_block("Price on application", "/car-details/2", None, &[]);
    let listings = extract(&results_page(Some((1, 1)), &[unpriced, priced]));
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].detail_link, "/car-details/1");
}

#[test]
fn block_without_detail_link_is_skipped() {
    let linked = listing_block("£5,250", "/car-details/1", None, &[]);
    let unlinked = listing_block("£4,000", "/dealers/acme", None, &[]);
    let listings = extract(&results_page(None, &[linked, unlinked]));
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].price_text.as_deref(), Some("£5,250"));
}

#[test]
fn sections_without_listing_marker_are_ignored() {
    let page = r#"<html><body>
        <section data-testid="promoted-listing"><a href="/car-details/9">x</a>£1,000</section>
        <section><a href="/car-details/8">y</a>£2,000</section>
    </body></html>"#;
    assert!(extract(page).is_empty());
}

#[test]
fn page_without_listings_yields_nothing() {
    assert!(extract(&results_page(Some((1, 1)), &[])).is_empty());
    assert!(extract("").is_empty());
}

// -----------------------------------------------------------------------
// Optional fields
// -----------------------------------------------------------------------

#[test]
fn missing_seller_leaves_location_and_distance_empty() {
    let block = listing_block("£4,500", "/car-details/1", None, &["Manual"]);
    let listing = &extract(&results_page(None, &[block]))[0];
    assert!(listing.location.is_none());
    assert!(listing.distance_text.is_none());
    assert_eq!(listing.transmission.as_deref(), Some("Manual"));
}

#[test]
fn private_seller_without_dealer_label_keeps_listing() {
    let block = listing_block("£4,500", "/car-details/1", Some("Private seller"), &[]);
    let listings = extract(&results_page(None, &[block]));
    assert_eq!(listings.len(), 1);
    assert!(listings[0].location.is_none());
    assert!(listings[0].distance_text.is_none());
}

#[test]
fn seller_without_distance_leaves_both_fields_empty() {
    let block = listing_block("£4,500", "/car-details/1", Some("Dealer locationLeeds"), &[]);
    let listing = &extract(&results_page(None, &[block]))[0];
    assert!(listing.location.is_none());
    assert!(listing.distance_text.is_none());
}

#[test]
fn missing_spec_list_leaves_spec_fields_empty() {
    let page = r#"<section data-testid="trader-seller-listing">
        <a href="/car-details/77">Yaris</a><span>£2,750</span>
    </section>"#;
    let listing = &extract(page)[0];
    assert!(listing.year_text.is_none());
    assert!(listing.mileage_text.is_none());
    assert!(listing.transmission.is_none());
    assert!(listing.engine_text.is_none());
    assert!(listing.fuel.is_none());
    assert!(listing.owners_text.is_none());
}

#[test]
fn first_currency_amount_in_block_wins() {
    let block = listing_block("£6,100<small>£95 p/m</small>", "/car-details/1", None, &[]);
    let listing = &extract(&results_page(None, &[block]))[0];
    assert_eq!(listing.price_text.as_deref(), Some("£6,100"));
}

#[test]
fn name_comes_from_query_not_markup() {
    let block = listing_block("£4,500", "/car-details/1", None, &[]);
    let listings = SellerListingExtractor.extract(
        &results_page(None, &[block]),
        &VehicleQuery::new("Mazda", "Mazda2"),
    );
    assert_eq!(listings[0].name, "Mazda Mazda2");
}

// -----------------------------------------------------------------------
// parse_seller
// -----------------------------------------------------------------------

#[test]
fn parse_seller_splits_place_and_distance() {
    assert_eq!(
        parse_seller("Smith MotorsDealer location Wakefield (12 miles)"),
        Some((Some("Wakefield".to_owned()), "(12 miles)".to_owned()))
    );
}

#[test]
fn parse_seller_single_mile() {
    assert_eq!(
        parse_seller("Dealer locationLeeds (1 mile)"),
        Some((Some("Leeds".to_owned()), "(1 mile)".to_owned()))
    );
}

#[test]
fn parse_seller_ignores_text_after_closing_paren() {
    assert_eq!(
        parse_seller("Dealer locationYork (20 miles) Visit website"),
        Some((Some("York".to_owned()), "(20 miles)".to_owned()))
    );
}

#[test]
fn parse_seller_requires_label() {
    assert!(parse_seller("Leeds (5 miles)").is_none());
}

#[test]
fn parse_seller_keeps_distance_without_place() {
    assert_eq!(
        parse_seller("Dealer location(5 miles)"),
        Some((None, "(5 miles)".to_owned()))
    );
    assert_eq!(
        parse_seller("Dealer location   (2 miles)"),
        Some((None, "(2 miles)".to_owned()))
    );
}

#[test]
fn parse_seller_requires_distance() {
    assert!(parse_seller("Dealer locationLeeds ()").is_none());
    assert!(parse_seller("Dealer locationLeeds").is_none());
}

#[test]
fn blank_seller_place_keeps_distance_on_listing() {
    let page = results_page(
        Some((1, 1)),
        &[listing_block("£4,250", "/car-details/9", Some("Dealer location(7 miles)"), &[])],
    );
    let listings = SellerListingExtractor.extract(&page, &VehicleQuery::new("Honda", "Jazz"));
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].location, None);
    assert_eq!(listings[0].distance_text.as_deref(), Some("(7 miles)"));
}
