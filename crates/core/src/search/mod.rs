//! Fuzzy title search over a catalog snapshot.
//!
//! Ranking puts entries sharing a whole word with the query first, then
//! orders by the smallest Levenshtein distance between the raw query and any
//! of the entry's titles.

mod ranker;

pub use ranker::{has_exact_word_match, levenshtein_distance, rank, tokenize, DEFAULT_LIMIT};
