use crate::error::CoreError;
use crate::offsets::MatchOffset;

/// Results scoring below this are dropped as near-zero-relevance noise,
/// e.g. a bare prefix match deep inside an unrelated entry.
pub const MINIMUM_SCORE: f64 = 0.003;

/// Rank a candidate row.
///
/// Modern-English matches go first, then exact form and abbreviation
/// matches, then how early in the entry text the query terms appeared.
/// Scores only order results of a single search call; they have no
/// absolute scale.
pub fn score_term(
    term_match: bool,
    mod_e_match: bool,
    has_mod_e: bool,
    entry_type: &str,
    offsets: &[MatchOffset],
) -> Result<f64, CoreError> {
    if entry_type != "a" && entry_type != "e" {
        return Err(CoreError::InvalidEntryType(entry_type.to_string()));
    }
    let mut score = 0.0;
    if mod_e_match {
        score += 5.0;
    }
    if term_match {
        score += 2.0;
    }
    if entry_type == "a" {
        score += 1.0;
    }
    if has_mod_e {
        score += 0.5;
    }
    if let Some(first) = offsets.first() {
        // The engine reports 0-based positions; a match at the very start
        // of the text still earns the full positional bonus.
        score += 1.0 / f64::from(first.offset.max(1));
    }
    Ok(score)
}
