//! Episode listing for a single title.
//!
//! A title's episodes are spread across one primary detail page and any
//! number of season pages. Each page yields one batch; the batches are
//! merged into a single list ordered by season, then episode.

mod aggregator;
mod types;

pub use aggregator::{aggregate, parse_number};
pub use types::*;
