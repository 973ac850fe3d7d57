//! On-disk cover image cache keyed by title id.

mod cache;

pub use cache::{ThumbnailCache, ThumbnailError};
