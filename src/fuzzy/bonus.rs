//! Per-position boundary bonus.

use super::{SCORE_MATCH_CAPITAL, SCORE_MATCH_DOT, SCORE_MATCH_SLASH, SCORE_MATCH_WORD, Score};

/// Character class that decides which bonuses a haystack position can earn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BonusState {
    /// Anything outside `A-Z`, `a-z` and `0-9`: never rewarded.
    Default,
    LowerOrDigit,
    Upper,
}

impl BonusState {
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            BonusState::Upper
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            BonusState::LowerOrDigit
        } else {
            BonusState::Default
        }
    }

    /// Bonus for a character of this class when it follows `prev`.
    pub fn bonus_after(self, prev: char) -> Score {
        match self {
            BonusState::Default => 0.0,
            BonusState::LowerOrDigit => separator_bonus(prev),
            BonusState::Upper => {
                if prev.is_ascii_lowercase() {
                    SCORE_MATCH_CAPITAL
                } else {
                    separator_bonus(prev)
                }
            }
        }
    }
}

fn separator_bonus(prev: char) -> Score {
    match prev {
        '/' => SCORE_MATCH_SLASH,
        '-' | '_' | ' ' => SCORE_MATCH_WORD,
        '.' => SCORE_MATCH_DOT,
        _ => 0.0,
    }
}

/// Bonus for every char position of `haystack`.
///
/// Computed on the original (unfolded) text so camelCase is visible. The
/// position before index 0 counts as a `/`.
pub fn bonus_table(haystack: &str) -> Vec<Score> {
    let mut prev = '/';
    haystack
        .chars()
        .map(|c| {
            let bonus = BonusState::of(c).bonus_after(prev);
            prev = c;
            bonus
        })
        .collect()
}
