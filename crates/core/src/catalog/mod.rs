//! Title catalog - the searchable list of every title on the listing site.
//!
//! The catalog is refreshed wholesale from the listing page and held in
//! memory as an immutable snapshot.

mod store;
mod types;

pub use store::CatalogStore;
pub use types::*;
