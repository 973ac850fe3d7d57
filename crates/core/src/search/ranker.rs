use std::collections::HashSet;

use crate::catalog::{CatalogEntry, CatalogSnapshot};

/// Result size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 20;

/// Lower-case `text` and split it on whitespace into a set of words.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether any query word equals any word of any of `titles`.
///
/// Whole-word, case-insensitive equality; substrings do not count.
pub fn has_exact_word_match<'a>(
    query_words: &HashSet<String>,
    titles: impl IntoIterator<Item = &'a str>,
) -> bool {
    if query_words.is_empty() {
        return false;
    }
    titles
        .into_iter()
        .any(|title| !tokenize(title).is_disjoint(query_words))
}

/// Levenshtein edit distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Single rolling row: prev[j] holds the distance for a[..i] vs b[..j].
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Smallest distance between `query` and any title of `entry`.
fn best_distance(query: &str, entry: &CatalogEntry) -> usize {
    entry
        .titles()
        .map(|title| levenshtein_distance(query, title))
        .min()
        .unwrap_or(usize::MAX)
}

/// Rank the whole snapshot against `query` and keep the first `limit` entries.
///
/// Exact-word matches come first; within each partition lower edit distance
/// wins. The sort is stable, so true ties keep snapshot order, but callers
/// must not rely on that.
pub fn rank(query: &str, snapshot: &CatalogSnapshot, limit: usize) -> Vec<CatalogEntry> {
    let query_words = tokenize(query);

    let mut scored: Vec<(bool, usize, &CatalogEntry)> = snapshot
        .entries()
        .iter()
        .map(|entry| {
            let exact = has_exact_word_match(&query_words, entry.titles());
            (exact, best_distance(query, entry), entry)
        })
        .collect();

    // `!exact` so that `true` sorts before `false`.
    scored.sort_by_key(|(exact, distance, _)| (!*exact, *distance));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, _, entry)| entry.clone())
        .collect()
}
