//! Listing records: the raw, string-typed shape scraped from a results page
//! and the typed shape produced by normalization.

use serde::{Deserialize, Serialize};

/// One scraped result. Every field except `name` and `detail_link` may be
/// absent when the listing markup omits or mislabels it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: String,
    pub price_text: Option<String>,
    pub year_text: Option<String>,
    pub mileage_text: Option<String>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub engine_text: Option<String>,
    pub owners_text: Option<String>,
    pub location: Option<String>,
    pub distance_text: Option<String>,
    pub detail_link: String,
}

/// A count that is either known or explicitly unknown.
///
/// `Unknown` orders before every `Known` value, so ranking by distance puts
/// listings with no distance first. The `-1` sentinel only appears when a
/// row is written out (see [`Reading::sentinel`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Reading {
    #[default]
    Unknown,
    Known(u32),
}

impl Reading {
    #[must_use]
    pub fn known(self) -> Option<u32> {
        match self {
            Reading::Known(n) => Some(n),
            Reading::Unknown => None,
        }
    }

    /// Collapses to the report representation: the value, or `-1`.
    #[must_use]
    pub fn sentinel(self) -> i64 {
        match self {
            Reading::Known(n) => i64::from(n),
            Reading::Unknown => -1,
        }
    }
}

impl From<Option<u32>> for Reading {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Reading::Unknown, Reading::Known)
    }
}

/// Typed, cleaned view of a [`RawListing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub name: String,
    /// Absolute URL of the listing's detail page.
    pub link: String,
    pub price: Option<u32>,
    pub year: Option<i32>,
    pub mileage: Option<u32>,
    /// Average annual mileage; `0` when it cannot be derived.
    pub miles_per_year: u32,
    pub owners: Reading,
    /// Distance from the search postcode in miles.
    pub distance: Reading,
    pub location: Option<String>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
}

/// Column headers of the ranked report, in output order.
pub const REPORT_COLUMNS: [&str; 12] = [
    "name",
    "link",
    "price",
    "year",
    "mileage",
    "miles_per_year",
    "owners",
    "distance",
    "location",
    "engine",
    "transmission",
    "fuel",
];

/// One spreadsheet cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

impl<'a> Cell<'a> {
    fn text(value: Option<&'a str>) -> Self {
        value.map_or(Cell::Empty, Cell::Text)
    }

    fn number<T: Into<f64>>(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, |n| Cell::Number(n.into()))
    }
}

impl NormalizedListing {
    /// Projects the listing into report cells ordered as [`REPORT_COLUMNS`].
    #[must_use]
    pub fn to_row(&self) -> [Cell<'_>; 12] {
        [
            Cell::Text(&self.name),
            Cell::Text(&self.link),
            Cell::number(self.price),
            Cell::number(self.year),
            Cell::number(self.mileage),
            Cell::Number(f64::from(self.miles_per_year)),
            Cell::Number(sentinel_f64(self.owners)),
            Cell::Number(sentinel_f64(self.distance)),
            Cell::text(self.location.as_deref()),
            Cell::text(self.engine.as_deref()),
            Cell::text(self.transmission.as_deref()),
            Cell::text(self.fuel.as_deref()),
        ]
    }
}

fn sentinel_f64(reading: Reading) -> f64 {
    reading.known().map_or(-1.0, f64::from)
}
