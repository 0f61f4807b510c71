use crate::FetchError;
use url::Url;

/// Validates a URL string before any network I/O
///
/// A preview fetch must fail fast on bad input rather than waste a network
/// round trip, so this runs as the first step of the pipeline.
///
/// # Validation Steps
///
/// 1. Parse the string as an absolute URL; reject if malformed
/// 2. Require the `http` or `https` scheme
/// 3. Require a host component
///
/// # Arguments
///
/// * `url_str` - The URL string to validate
///
/// # Returns
///
/// * `Ok(Url)` - Parsed, validated URL
/// * `Err(FetchError::InvalidUrl)` - Input cannot be previewed
///
/// # Examples
///
/// ```
/// use richlinks::validate_url;
///
/// let url = validate_url("https://example.com/post").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(validate_url("not a url").is_err());
/// assert!(validate_url("ftp://example.com/").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, FetchError> {
    let url = Url::parse(url_str)
        .map_err(|e| FetchError::InvalidUrl(format!("{url_str}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{}' in {url_str}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(FetchError::InvalidUrl(format!("no host in {url_str}")));
    }

    Ok(url)
}

/// Extracts the host from a URL, lowercased
///
/// Returns None if the URL has no host, which cannot happen for URLs that
/// passed [`validate_url`].
///
/// # Examples
///
/// ```
/// use url::Url;
/// use richlinks::extract_host;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
