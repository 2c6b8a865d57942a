mod app_config;
mod config;
mod error;
pub mod listing;
pub mod search;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use listing::{Cell, NormalizedListing, RawListing, Reading, REPORT_COLUMNS};
pub use search::{load_search_file, parse_search_file, SearchCriteria, SearchFile, VehicleQuery};
