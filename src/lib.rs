//! RichLinks: link-preview metadata extraction
//!
//! This crate fetches a URL's HTML and derives the small structured record a
//! rich-link preview card needs: title, Open Graph description, Open Graph
//! image, and host. The result is a three-state [`LinkResult`] (loading,
//! success, failure) with defined fallback behavior when fields are absent
//! or the fetch fails.
//!
//! The rendering layer, image loading, and link launching are external
//! collaborators; this crate's boundary is one URL string in, one
//! [`LinkResult`] out.

pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod url;

use thiserror::Error;

/// Main error type for metadata fetch operations
///
/// Every failure in the fetch pipeline is converted into one of these
/// variants at the fetch boundary; none propagate as panics past
/// [`fetcher::fetch_metadata`]. Missing optional fields (no OG tags, empty
/// title) are not errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Empty response from {url}")]
    EmptyBody { url: String },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Unexpected error for {url}: {message}")]
    Unknown { url: String, message: String },
}

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use extractor::{extract_fields, PageFields};
pub use fetcher::{
    build_http_client, fetch_metadata, try_fetch_metadata, FetcherConfig, HttpFetch, HttpResponse,
    ReqwestFetcher,
};
pub use model::{LinkMetadata, LinkResult};
pub use crate::url::{extract_host, validate_url};
