//! Show detail assembly.
//!
//! Fetches a title's primary page, fans out to its season pages and merges
//! every page's episodes into one ordered list.

mod service;

pub use service::ShowDetailService;
