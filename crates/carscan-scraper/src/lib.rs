pub mod classify;
pub mod collect;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod rank;

#[cfg(test)]
mod test_support;

pub use collect::{collect_listings, CollectSettings, RawDataset};
pub use error::ScraperError;
pub use extract::{ListingExtractor, SellerListingExtractor};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use normalize::{normalize_listing, normalize_listings};
pub use pagination::{paginate, parse_page_count};
pub use query::{SearchRequest, SearchSite};
pub use rank::filter_and_rank;
