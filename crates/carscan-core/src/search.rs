//! Search targets and shared criteria, loaded once from a YAML file.
//!
//! Values are kept as strings: the listing site accepts them verbatim as
//! query parameters, and malformed values surface later as null/unknown
//! fields rather than failing the run.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

/// A single make/model search target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQuery {
    #[serde(deserialize_with = "scalar_string")]
    pub make: String,
    #[serde(deserialize_with = "scalar_string")]
    pub model: String,
}

impl VehicleQuery {
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }

    /// Display name used for every listing scraped under this query,
    /// e.g. `"Toyota Yaris"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Constraints shared by every query in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(deserialize_with = "scalar_string")]
    pub postcode: String,
    #[serde(deserialize_with = "scalar_string")]
    pub radius: String,
    #[serde(deserialize_with = "scalar_string")]
    pub year_from: String,
    #[serde(deserialize_with = "scalar_string")]
    pub year_to: String,
    #[serde(deserialize_with = "scalar_string")]
    pub price_from: String,
    #[serde(deserialize_with = "scalar_string")]
    pub price_to: String,
}

impl SearchCriteria {
    /// Upper price bound as an integer, or `None` when `price_to` is not a
    /// whole number.
    #[must_use]
    pub fn price_ceiling(&self) -> Option<u32> {
        self.price_to.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchFile {
    pub criteria: SearchCriteria,
    pub vehicles: Vec<VehicleQuery>,
}

/// Load and validate the search configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_search_file(path: &Path) -> Result<SearchFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SearchFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_search_file(&content)
}

/// Parse and validate search configuration from YAML text.
///
/// # Errors
///
/// Returns `ConfigError::SearchFileParse` for malformed YAML and
/// `ConfigError::Validation` for an empty vehicle list or blank make/model.
pub fn parse_search_file(content: &str) -> Result<SearchFile, ConfigError> {
    let search_file: SearchFile = serde_yaml::from_str(content)?;
    validate_search_file(&search_file)?;
    Ok(search_file)
}

fn validate_search_file(search_file: &SearchFile) -> Result<(), ConfigError> {
    if search_file.vehicles.is_empty() {
        return Err(ConfigError::Validation(
            "at least one vehicle must be configured".to_string(),
        ));
    }

    for (idx, vehicle) in search_file.vehicles.iter().enumerate() {
        if vehicle.make.trim().is_empty() || vehicle.model.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "vehicle #{} must have a non-empty make and model",
                idx + 1
            )));
        }
    }

    Ok(())
}

/// Accepts a YAML string or a bare number (`radius: 20`, `model: 500`) and
/// keeps it as text.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}
