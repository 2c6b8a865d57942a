//! Content-signature classification of listing spec strings.
//!
//! The site renders a short list of specs per listing (`"2012 (12 reg)"`,
//! `"45,000 miles"`, `"1.3L"`, ...) in no guaranteed order, so each string
//! is classified by what it contains rather than where it sits.

/// Which [`carscan_core::RawListing`] field a spec string fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecField {
    Year,
    Mileage,
    Transmission,
    Engine,
    Fuel,
    Owners,
}

/// Rules are tried in order; the first matching predicate wins.
const SPEC_RULES: &[(SpecField, fn(&str) -> bool)] = &[
    (SpecField::Year, |s: &str| s.contains("reg")),
    (SpecField::Mileage, |s: &str| s.contains("miles")),
    (SpecField::Transmission, |s: &str| matches!(s, "Manual" | "Automatic")),
    (SpecField::Engine, |s: &str| s.contains('.') && s.contains('L')),
    (SpecField::Fuel, |s: &str| matches!(s, "Petrol" | "Diesel")),
    (SpecField::Owners, |s: &str| s.contains("owner")),
];

/// Classifies one spec string, returning the field it belongs to and the
/// value to store.
///
/// Owner counts keep only the leading digit (`"2 owners"` → `"2"`); an owner
/// string that does not start with a digit is treated as unclassified.
/// Strings that match no rule return `None`.
#[must_use]
pub fn classify_spec(text: &str) -> Option<(SpecField, String)> {
    let text = text.trim();
    let (field, _) = SPEC_RULES.iter().find(|(_, matches)| matches(text))?;

    let value = match field {
        SpecField::Owners => text
            .chars()
            .next()
            .filter(char::is_ascii_digit)?
            .to_string(),
        _ => text.to_owned(),
    };

    Some((*field, value))
}
