use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("invalid site URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("listing rejected: {reason}")]
    ListingRejected { reason: String },
}
