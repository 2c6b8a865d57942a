use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub site_origin: String,
    pub settle_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
