//! Metadata fetching for link previews
//!
//! This module contains the core fetch logic, including:
//! - HTTP client construction and the swappable transport seam
//! - The validate → fetch → gate → extract pipeline
//!
//! Each invocation is independent: no shared mutable state, no coalescing of
//! concurrent fetches for the same URL, no cache. Cancellation is dropping
//! the future; a dropped fetch never applies its result anywhere.

mod client;
mod fetch;

pub use client::{build_http_client, FetcherConfig, HttpFetch, HttpResponse, ReqwestFetcher};
pub use fetch::{fetch_metadata, try_fetch_metadata};
