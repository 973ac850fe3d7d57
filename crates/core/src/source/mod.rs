//! Upstream listing site access.
//!
//! This module provides a `ShowSource` trait for fetching the catalog,
//! detail pages and season pages of the listing site, plus the HTML
//! extraction that turns those pages into typed values.

mod aniworld;
mod extract;
mod types;

pub use aniworld::AniworldSource;
pub use extract::{parse_catalog, parse_season, parse_show_page};
pub use types::*;
