//! Rank a candidate list against a query.

use rayon::prelude::*;
use tracing::debug;

use super::{SCORE_MIN, Score, Scratch, has_match, positions_with, score_with};

/// A ranked candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub text: String,
    pub score: Score,
    /// Matched char index for each needle char. `None` for the empty query.
    pub positions: Option<Vec<usize>>,
}

/// Rank `candidates` best-first against `needle`.
///
/// An empty needle keeps every candidate, in input order, with score 0.
/// Otherwise non-matches are dropped and survivors are sorted by descending
/// score; equal scores keep their input order.
pub fn filter<S>(needle: &str, candidates: &[S]) -> Vec<Choice>
where
    S: AsRef<str> + Sync,
{
    if needle.is_empty() {
        return candidates
            .iter()
            .map(|c| Choice {
                text: c.as_ref().to_string(),
                score: 0.0,
                positions: None,
            })
            .collect();
    }

    let mut choices: Vec<Choice> = candidates
        .par_iter()
        .map_init(Scratch::new, |scratch, candidate| {
            let text = candidate.as_ref();
            if !has_match(needle, text) {
                return None;
            }
            // Over-long haystacks pass `has_match` but cannot be scored.
            let score = score_with(scratch, needle, text);
            if score == SCORE_MIN {
                return None;
            }
            let positions = positions_with(scratch, needle, text)?;
            Some(Choice {
                text: text.to_string(),
                score,
                positions: Some(positions),
            })
        })
        .flatten()
        .collect();

    // Stable, so ties fall back to input order.
    choices.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        needle,
        candidates = candidates.len(),
        matched = choices.len(),
        "ranked candidates"
    );

    choices
}
