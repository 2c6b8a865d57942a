use crate::app_config::AppConfig;
use crate::ConfigError;

/// Browser-like user agent; the listing site serves a stripped page to
/// obvious bots.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let search_path = PathBuf::from(or_default("CARSCAN_SEARCH_PATH", "./config/search.yaml"));
    let output_path = PathBuf::from(or_default("CARSCAN_OUTPUT_PATH", "./cars.xlsx"));
    let log_level = or_default("CARSCAN_LOG_LEVEL", "info");

    let site_origin = or_default("CARSCAN_SITE_ORIGIN", "https://www.autotrader.co.uk");
    if site_origin.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CARSCAN_SITE_ORIGIN".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let settle_delay_ms = parse_u64("CARSCAN_SETTLE_DELAY_MS", "5000")?;
    let request_timeout_secs = parse_u64("CARSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CARSCAN_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        search_path,
        output_path,
        log_level,
        site_origin,
        settle_delay_ms,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
