//! Result and metadata types for link previews
//!
//! This module defines the value the rendering layer consumes:
//!
//! - `LinkResult`: the three-state result a preview card switches on
//!   (loading spinner, populated card, error glyph)
//! - `LinkMetadata`: the immutable record extracted from a fetched page

use crate::FetchError;
use serde::{Deserialize, Serialize};

/// Metadata extracted from a fetched page
///
/// Constructed once per fetch and never mutated; a re-fetch produces a fresh
/// value. Optional fields are `None` when the page omits them — an empty
/// `<title>` or missing OG tag is normalized to `None`, never an empty
/// string, so consumers need a single fallback branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    /// The fetched URL in resolved form (after redirects)
    pub url: String,

    /// Lowercased host component of `url`
    pub host: String,

    /// Text of the first `<title>` element, if non-empty
    pub title: Option<String>,

    /// Content of the first `<meta property="og:description">`, if non-empty
    pub description: Option<String>,

    /// Content of the first `<meta property="og:image">`, if non-empty
    pub image_url: Option<String>,
}

/// State of a link preview as the rendering layer sees it
///
/// `Loading` is the initial value a caller holds while a fetch is in flight;
/// the fetch operation itself only ever resolves to `Success` or `Failure`.
/// Each preview transitions from `Loading` to a terminal variant exactly once.
#[derive(Debug, Default)]
pub enum LinkResult {
    /// Fetch in flight; caller-side sentinel, never produced by the fetcher
    #[default]
    Loading,

    /// Fetch completed and metadata was extracted
    Success(LinkMetadata),

    /// Fetch failed; the cause is for logs, not for the card
    Failure(FetchError),
}

impl LinkResult {
    /// Returns true if the fetch is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the fetch resolved with metadata
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if the fetch resolved with an error
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the extracted metadata, if this is a `Success`
    pub fn metadata(&self) -> Option<&LinkMetadata> {
        match self {
            Self::Success(metadata) => Some(metadata),
            _ => None,
        }
    }

    /// Returns the failure cause, if this is a `Failure`
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }
}
