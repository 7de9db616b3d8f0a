//! Fuzzy subsequence matching with boundary-aware scoring.
//!
//! A needle matches a haystack when every needle character appears in the
//! haystack in order (case-insensitively). Matches are then scored with a
//! dynamic-programming alignment that rewards:
//! - landing right after a path or word separator (`/`, `-`, `_`, space, `.`)
//! - camelCase transitions
//! - runs of consecutive characters
//!
//! and lightly penalizes skipped haystack characters, so shorter and tighter
//! candidates win ties.
//!
//! The layers are deliberately small and pure:
//! - [`has_match`] is a cheap linear subsequence check
//! - [`score`] runs the DP with two rolling rows
//! - [`positions`] runs the same DP with full matrices and backtracks
//! - [`filter`] ranks a candidate list best-first
//!
//! Absence of a match is always data ([`SCORE_MIN`], `None`, `false`, or
//! omission), never an error.

mod bonus;
mod filter;
mod matrix;

pub use bonus::{BonusState, bonus_table};
pub use filter::{Choice, filter};
pub use matrix::{Scratch, positions, positions_with, score, score_with};

/// Alignment score. Higher is better.
pub type Score = f64;

/// No valid alignment exists.
pub const SCORE_MIN: Score = f64::NEG_INFINITY;
/// Needle equals haystack (case-insensitively).
pub const SCORE_MAX: Score = f64::INFINITY;

pub const SCORE_GAP_LEADING: Score = -0.005;
pub const SCORE_GAP_TRAILING: Score = -0.005;
pub const SCORE_GAP_INNER: Score = -0.01;
pub const SCORE_MATCH_CONSECUTIVE: Score = 1.0;
pub const SCORE_MATCH_SLASH: Score = 0.9;
pub const SCORE_MATCH_WORD: Score = 0.8;
pub const SCORE_MATCH_CAPITAL: Score = 0.7;
pub const SCORE_MATCH_DOT: Score = 0.6;

/// Haystacks longer than this (in chars) never match. Bounds per-candidate cost.
pub const MATCH_MAX_LEN: usize = 1024;

/// Simple per-character case folding.
///
/// Characters whose lowercase form expands to several chars keep only the
/// first one, so folded strings have the same length as the original.
#[inline]
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// True if `needle` is a case-insensitive subsequence of `haystack`.
///
/// An empty needle matches everything. Runs in `O(|haystack|)`.
pub fn has_match(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars().map(fold);
    needle
        .chars()
        .map(fold)
        .all(|want| hay.any(|c| c == want))
}

/// Render a score for humans: `exact` for [`SCORE_MAX`], three decimals otherwise.
pub fn format_score(score: Score) -> String {
    if score == SCORE_MAX {
        "exact".to_string()
    } else if score == SCORE_MIN {
        "-".to_string()
    } else {
        format!("{:.3}", score)
    }
}
