//! HTML field extraction for link previews
//!
//! This module parses fetched HTML and pulls out the fields a preview card
//! shows:
//! - Page title (from the first `<title>` element)
//! - Description (from `<meta property="og:description">`)
//! - Thumbnail URL (from `<meta property="og:image">`)
//!
//! Parsing is tolerant: real-world pages are rarely valid HTML, so malformed
//! markup never fails the operation. Missing OG tags are the normal case for
//! ordinary pages and yield `None`, not an error.

use crate::FetchError;
use scraper::{Html, Selector};

/// Fields extracted from a page's HTML
///
/// Empty and whitespace-only values are normalized to `None` so consumers
/// have a single fallback branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFields {
    /// Text of the first `<title>` element
    pub title: Option<String>,

    /// Content attribute of the first `og:description` meta element
    pub description: Option<String>,

    /// Content attribute of the first `og:image` meta element
    pub image_url: Option<String>,
}

/// Parses HTML content and extracts preview fields
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `url` - The URL the content came from, used in error reporting
///
/// # Returns
///
/// * `Ok(PageFields)` - Extracted fields, any of which may be absent
/// * `Err(FetchError::HtmlParse)` - A selector failed to compile
///
/// # Examples
///
/// ```
/// use richlinks::extract_fields;
///
/// let html = r#"<html><head><title>Test</title>
/// <meta property="og:description" content="A page"/>
/// </head><body></body></html>"#;
/// let fields = extract_fields(html, "https://example.com/").unwrap();
/// assert_eq!(fields.title.as_deref(), Some("Test"));
/// assert_eq!(fields.description.as_deref(), Some("A page"));
/// assert_eq!(fields.image_url, None);
/// ```
pub fn extract_fields(html: &str, url: &str) -> Result<PageFields, FetchError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document, url)?;
    let description = extract_meta_property(&document, "og:description", url)?;
    let image_url = extract_meta_property(&document, "og:image", url)?;

    Ok(PageFields {
        title,
        description,
        image_url,
    })
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html, url: &str) -> Result<Option<String>, FetchError> {
    let selector = Selector::parse("title").map_err(|e| FetchError::HtmlParse {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .and_then(non_empty))
}

/// Extracts the content attribute of the first matching OG meta element
fn extract_meta_property(
    document: &Html,
    property: &str,
    url: &str,
) -> Result<Option<String>, FetchError> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).map_err(|e| {
        FetchError::HtmlParse {
            url: url.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .and_then(non_empty))
}

/// Trims a value and normalizes empty strings to None
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
