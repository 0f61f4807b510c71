//! URL handling for link previews
//!
//! This module validates incoming URL strings before any network I/O and
//! extracts the normalized host shown on preview cards.

mod validate;

// Re-export main functions
pub use validate::{extract_host, validate_url};
