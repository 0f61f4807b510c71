//! The metadata fetch pipeline
//!
//! One invocation performs: URL validation, a single GET through the injected
//! transport, status and body gating, tolerant HTML extraction, and metadata
//! construction. Every failure is converted to a [`FetchError`] at this
//! boundary; nothing panics or escapes past [`fetch_metadata`].

use crate::extractor::extract_fields;
use crate::fetcher::HttpFetch;
use crate::model::{LinkMetadata, LinkResult};
use crate::url::{extract_host, validate_url};
use crate::{FetchError, Result};

/// Fetches preview metadata for a URL, returning an explicit `Result`
///
/// # Pipeline
///
/// 1. Validate the URL (fail fast, no network on bad input)
/// 2. GET the page through the transport, following redirects
/// 3. Reject non-2xx statuses
/// 4. Reject empty bodies
/// 5. Extract title and OG fields from the HTML
/// 6. Build [`LinkMetadata`] from the redirect-resolved final URL
///
/// Missing title or OG tags are not failures; they yield `None` fields.
///
/// # Arguments
///
/// * `fetcher` - The HTTP transport to fetch through
/// * `url` - The URL string to preview
pub async fn try_fetch_metadata<F>(fetcher: &F, url: &str) -> Result<LinkMetadata>
where
    F: HttpFetch + ?Sized,
{
    let parsed = validate_url(url)?;

    let response = fetcher.get(&parsed).await?;

    if !(200..300).contains(&response.status) {
        return Err(FetchError::HttpStatus {
            url: response.final_url.to_string(),
            status: response.status,
        });
    }

    if response.body.is_empty() {
        return Err(FetchError::EmptyBody {
            url: response.final_url.to_string(),
        });
    }

    let fields = extract_fields(&response.body, response.final_url.as_str())?;

    let host = extract_host(&response.final_url).ok_or_else(|| FetchError::Unknown {
        url: response.final_url.to_string(),
        message: "resolved URL has no host".to_string(),
    })?;

    Ok(LinkMetadata {
        url: response.final_url.to_string(),
        host,
        title: fields.title,
        description: fields.description,
        image_url: fields.image_url,
    })
}

/// Fetches preview metadata for a URL, resolving to a [`LinkResult`]
///
/// This is the operation the rendering layer calls once per displayed item.
/// It always resolves to `Success` or `Failure`, never `Loading` (that is the
/// caller's initial value while this future is in flight). Failure causes are
/// logged here for diagnosis; the caller shows a generic unavailable state
/// without the internal detail.
///
/// # Example
///
/// ```no_run
/// use richlinks::{fetch_metadata, FetcherConfig, LinkResult, ReqwestFetcher};
///
/// # async fn example() {
/// let fetcher = ReqwestFetcher::new(&FetcherConfig::default()).unwrap();
/// match fetch_metadata(&fetcher, "https://www.rust-lang.org/").await {
///     LinkResult::Success(metadata) => println!("{}", metadata.host),
///     LinkResult::Failure(_) => println!("link unavailable"),
///     LinkResult::Loading => unreachable!(),
/// }
/// # }
/// ```
pub async fn fetch_metadata<F>(fetcher: &F, url: &str) -> LinkResult
where
    F: HttpFetch + ?Sized,
{
    match try_fetch_metadata(fetcher, url).await {
        Ok(metadata) => {
            tracing::debug!(url = %metadata.url, host = %metadata.host, "fetched link metadata");
            LinkResult::Success(metadata)
        }
        Err(error) => {
            tracing::warn!(url, error = %error, "metadata fetch failed");
            LinkResult::Failure(error)
        }
    }
}
