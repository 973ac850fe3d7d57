use super::Episode;

/// Best-effort conversion of a page identifier to a number.
///
/// Surrounding whitespace is ignored and a leading sign is honoured.
/// Anything that is not a plain decimal integer maps to 0, so one malformed
/// episode never discards the rest of its season.
pub fn parse_number(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Merge per-page episode batches into one list.
///
/// Batches are concatenated primary first, then additional pages in the
/// order their links were discovered, and the result is stably sorted by
/// `(season, episode)`. Equal positions keep encounter order; nothing is
/// deduplicated.
pub fn aggregate<I>(primary: Vec<Episode>, additional: I) -> Vec<Episode>
where
    I: IntoIterator<Item = Vec<Episode>>,
{
    let mut episodes = primary;
    for batch in additional {
        episodes.extend(batch);
    }
    episodes.sort_by_key(Episode::position);
    episodes
}
