use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read search file {path}: {source}")]
    SearchFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search file: {0}")]
    SearchFileParse(#[from] serde_yaml::Error),

    #[error("search file validation failed: {0}")]
    Validation(String),
}
