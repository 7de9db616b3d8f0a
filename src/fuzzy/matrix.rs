//! DP alignment: scoring with rolling rows, and match positions via full
//! matrices plus backtracking.
//!
//! Both entry points drive the same [`compute_row`], so the score reported by
//! [`score`] and the alignment recovered by [`positions`] cannot drift apart.
//!
//! For needle index `i` and haystack index `j`:
//! - `D[i][j]`: best score of an alignment whose `i`-th needle char sits on `j`
//! - `M[i][j]`: best score of aligning `needle[..=i]` within `haystack[..=j]`
//!
//! `M[i][j] >= D[i][j]` wherever both are defined.

use super::{
    MATCH_MAX_LEN, SCORE_GAP_INNER, SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CONSECUTIVE,
    SCORE_MAX, SCORE_MIN, Score, bonus_table, fold,
};

/// Folded needle/haystack plus the haystack bonus table, built once per pair.
struct MatchContext {
    needle: Vec<char>,
    haystack: Vec<char>,
    bonus: Vec<Score>,
}

impl MatchContext {
    fn new(needle: &str, haystack: &str) -> Self {
        Self {
            needle: needle.chars().map(fold).collect(),
            haystack: haystack.chars().map(fold).collect(),
            bonus: bonus_table(haystack),
        }
    }
}

/// What the cheap length checks decided before any DP runs.
enum Precheck {
    Impossible,
    /// Same length; positions are the identity.
    Exact,
    Align(MatchContext),
}

fn precheck(needle: &str, haystack: &str) -> Precheck {
    if needle.is_empty() {
        return Precheck::Impossible;
    }

    let n = needle.chars().count();
    let m = haystack.chars().count();
    if m > MATCH_MAX_LEN || n > m {
        return Precheck::Impossible;
    }

    // A same-length subsequence has to consume every char.
    if n == m {
        return if needle.chars().map(fold).eq(haystack.chars().map(fold)) {
            Precheck::Exact
        } else {
            Precheck::Impossible
        };
    }

    Precheck::Align(MatchContext::new(needle, haystack))
}

/// Read-only view of the previous needle row.
#[derive(Clone, Copy)]
struct Row<'a> {
    d: &'a [Score],
    m: &'a [Score],
}

/// Fill row `i` of `D` and `M` from row `i - 1` (`last`, absent for `i == 0`).
fn compute_row(
    ctx: &MatchContext,
    i: usize,
    last: Option<Row<'_>>,
    curr_d: &mut [Score],
    curr_m: &mut [Score],
) {
    let want = ctx.needle[i];
    let gap = if i + 1 == ctx.needle.len() {
        SCORE_GAP_TRAILING
    } else {
        SCORE_GAP_INNER
    };

    let mut best = SCORE_MIN;
    for (j, &c) in ctx.haystack.iter().enumerate() {
        if c == want {
            let score = match last {
                None => (j as Score) * SCORE_GAP_LEADING + ctx.bonus[j],
                Some(_) if j == 0 => SCORE_MIN,
                Some(row) => (row.m[j - 1] + ctx.bonus[j])
                    .max(row.d[j - 1] + SCORE_MATCH_CONSECUTIVE),
            };
            curr_d[j] = score;
            best = score.max(best + gap);
        } else {
            curr_d[j] = SCORE_MIN;
            best += gap;
        }
        curr_m[j] = best;
    }
}

/// Reusable DP buffers.
///
/// Ranking many candidates with one `Scratch` keeps allocation flat: the
/// buffers grow to the largest matrix seen and are then reused.
#[derive(Debug, Default)]
pub struct Scratch {
    d: Vec<Score>,
    m: Vec<Score>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn prepare(&mut self, len: usize) {
        self.d.clear();
        self.d.resize(len, SCORE_MIN);
        self.m.clear();
        self.m.resize(len, SCORE_MIN);
    }
}

/// Score how well `needle` aligns with `haystack`.
///
/// Returns [`SCORE_MIN`] for an empty needle, a haystack longer than
/// [`MATCH_MAX_LEN`], a needle longer than the haystack, or a non-match, and
/// [`SCORE_MAX`] when both are equal ignoring case. Callers ranking arbitrary
/// input should gate on [`super::has_match`] first.
pub fn score(needle: &str, haystack: &str) -> Score {
    score_with(&mut Scratch::new(), needle, haystack)
}

/// [`score`] using caller-provided buffers.
pub fn score_with(scratch: &mut Scratch, needle: &str, haystack: &str) -> Score {
    let ctx = match precheck(needle, haystack) {
        Precheck::Impossible => return SCORE_MIN,
        Precheck::Exact => return SCORE_MAX,
        Precheck::Align(ctx) => ctx,
    };

    let m = ctx.haystack.len();
    scratch.prepare(2 * m);
    let (d_a, d_b) = scratch.d.split_at_mut(m);
    let (m_a, m_b) = scratch.m.split_at_mut(m);
    let (mut last_d, mut curr_d) = (d_a, d_b);
    let (mut last_m, mut curr_m) = (m_a, m_b);

    for i in 0..ctx.needle.len() {
        let last = (i > 0).then_some(Row {
            d: &*last_d,
            m: &*last_m,
        });
        compute_row(&ctx, i, last, curr_d, curr_m);
        std::mem::swap(&mut last_d, &mut curr_d);
        std::mem::swap(&mut last_m, &mut curr_m);
    }

    last_m[m - 1]
}

/// Haystack char index matched by each needle char, in the alignment that
/// [`score`] rewards.
///
/// Returns `None` whenever [`score`] would be [`SCORE_MIN`]. Otherwise the
/// indices are strictly increasing, one per needle char.
pub fn positions(needle: &str, haystack: &str) -> Option<Vec<usize>> {
    positions_with(&mut Scratch::new(), needle, haystack)
}

/// [`positions`] using caller-provided buffers.
pub fn positions_with(scratch: &mut Scratch, needle: &str, haystack: &str) -> Option<Vec<usize>> {
    let ctx = match precheck(needle, haystack) {
        Precheck::Impossible => return None,
        Precheck::Exact => return Some((0..needle.chars().count()).collect()),
        Precheck::Align(ctx) => ctx,
    };

    let n = ctx.needle.len();
    let m = ctx.haystack.len();
    scratch.prepare(n * m);

    for i in 0..n {
        let (done_d, rest_d) = scratch.d.split_at_mut(i * m);
        let (done_m, rest_m) = scratch.m.split_at_mut(i * m);
        let last = (i > 0).then(|| Row {
            d: &done_d[(i - 1) * m..],
            m: &done_m[(i - 1) * m..],
        });
        compute_row(&ctx, i, last, &mut rest_d[..m], &mut rest_m[..m]);
    }

    if scratch.m[n * m - 1] == SCORE_MIN {
        return None;
    }

    backtrack(&scratch.d, &scratch.m, n, m)
}

/// Walk the matrices from the last cell back to the first needle char.
fn backtrack(d: &[Score], mm: &[Score], n: usize, m: usize) -> Option<Vec<usize>> {
    let at = |i: usize, j: usize| i * m + j;

    let mut found = vec![0; n];
    let mut match_required = false;
    // One past the next haystack index to try.
    let mut j = m;

    for i in (0..n).rev() {
        let mut hit = None;
        while j > 0 {
            j -= 1;
            let here = d[at(i, j)];
            if here == SCORE_MIN {
                continue;
            }
            if match_required || here == mm[at(i, j)] {
                match_required = i > 0
                    && j > 0
                    && mm[at(i, j)] == d[at(i - 1, j - 1)] + SCORE_MATCH_CONSECUTIVE;
                hit = Some(j);
                break;
            }
        }
        found[i] = hit?;
    }

    Some(found)
}

#[cfg(test)]
mod tests {
    use super::super::{
        SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CAPITAL, SCORE_MATCH_DOT,
        SCORE_MATCH_SLASH, SCORE_MATCH_WORD, has_match,
    };
    use super::*;

    fn assert_close(got: Score, want: Score) {
        assert!(
            (got - want).abs() < 1e-9,
            "score = {}, want {}",
            got,
            want
        );
    }

    #[test]
    fn score_min_when_not_subsequence() {
        assert_eq!(score("abc", "acbx"), SCORE_MIN);
        assert_eq!(score("xyz", "abcd"), SCORE_MIN);
    }

    #[test]
    fn empty_needle_is_impossible() {
        assert_eq!(score("", "anything"), SCORE_MIN);
        assert_eq!(score("", ""), SCORE_MIN);
        assert_eq!(positions("", "anything"), None);
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(score("abcdef", "abc"), SCORE_MIN);
        assert_eq!(score("test", ""), SCORE_MIN);
    }

    #[test]
    fn over_long_haystack_never_matches() {
        let long = "a".repeat(MATCH_MAX_LEN + 1);
        assert_eq!(score("a", &long), SCORE_MIN);
        assert_eq!(positions("a", &long), None);

        let at_limit = "a".repeat(MATCH_MAX_LEN);
        assert!(score("a", &at_limit) > SCORE_MIN);
    }

    #[test]
    fn same_length_only_matches_when_equal() {
        assert_eq!(score("test", "test"), SCORE_MAX);
        assert_eq!(score("Test", "tEST"), SCORE_MAX);
        assert_eq!(score("test", "tset"), SCORE_MIN);
        assert_eq!(positions("test", "TEST"), Some(vec![0, 1, 2, 3]));
        assert_eq!(positions("test", "tset"), None);
    }

    #[test]
    fn leading_and_trailing_gaps() {
        assert_close(score("a", "*a"), SCORE_GAP_LEADING);
        assert_close(score("a", "*ba"), SCORE_GAP_LEADING * 2.0);
        assert_close(score("a", "**a*"), SCORE_GAP_LEADING * 2.0 + SCORE_GAP_TRAILING);
        assert_close(
            score("a", "**a**"),
            SCORE_GAP_LEADING * 2.0 + SCORE_GAP_TRAILING * 2.0,
        );
    }

    #[test]
    fn consecutive_run() {
        assert_close(score("aa", "*aa"), SCORE_GAP_LEADING + SCORE_MATCH_CONSECUTIVE);
        assert_close(
            score("aaa", "*aaa"),
            SCORE_GAP_LEADING + SCORE_MATCH_CONSECUTIVE * 2.0,
        );
    }

    #[test]
    fn boundary_bonuses() {
        assert_close(score("a", "/a"), SCORE_GAP_LEADING + SCORE_MATCH_SLASH);
        assert_close(score("a", "-a"), SCORE_GAP_LEADING + SCORE_MATCH_WORD);
        assert_close(score("a", ".a"), SCORE_GAP_LEADING + SCORE_MATCH_DOT);
        assert_close(score("b", "aB"), SCORE_GAP_LEADING + SCORE_MATCH_CAPITAL);
    }

    #[test]
    fn prefers_consecutive_matches() {
        assert!(score("abc", "abcx") > score("abc", "axbxcx"));
    }

    #[test]
    fn prefers_word_starts() {
        assert!(score("amor", "app/models/order") > score("amor", "app/models/zrder"));
        assert!(score("foo", "x foo") > score("foo", "xfoo"));
    }

    #[test]
    fn prefers_shorter_candidates() {
        assert!(score("test", "tests") > score("test", "testing"));
    }

    #[test]
    fn prefers_camel_case_boundary() {
        assert!(score("fb", "fooBar") > score("fb", "foobar"));
    }

    #[test]
    fn positions_consecutive_prefix() {
        assert_eq!(positions("dev", "development"), Some(vec![0, 1, 2]));
    }

    #[test]
    fn positions_follow_boundaries() {
        assert_eq!(positions("amo", "app/models/foo"), Some(vec![0, 4, 5]));
        assert_eq!(positions("amor", "app/models/order"), Some(vec![0, 4, 11, 12]));
    }

    #[test]
    fn positions_prefer_later_run_over_scattered_start() {
        assert_eq!(positions("api", "a/p/i/api"), Some(vec![6, 7, 8]));
    }

    #[test]
    fn positions_none_for_non_match() {
        assert_eq!(positions("zz", "abc"), None);
    }

    #[test]
    fn positions_count_chars_not_bytes() {
        assert_eq!(positions("ü", "aü/"), Some(vec![1]));
    }

    #[test]
    fn scratch_reuse_gives_same_answers() {
        let mut scratch = Scratch::new();
        let pairs = [
            ("amor", "app/models/order"),
            ("a", "*a"),
            ("dev", "development"),
            ("xy", "x/y"),
        ];
        for (needle, haystack) in pairs {
            assert_eq!(
                score_with(&mut scratch, needle, haystack),
                score(needle, haystack)
            );
            assert_eq!(
                positions_with(&mut scratch, needle, haystack),
                positions(needle, haystack)
            );
        }
    }

    #[test]
    fn score_agrees_with_has_match() {
        for (needle, haystack) in [("ab", "xaxb"), ("ba", "xaxb"), ("abc", "aabbc")] {
            assert_eq!(score(needle, haystack) > SCORE_MIN, has_match(needle, haystack));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::super::has_match;
    use super::*;
    use proptest::prelude::*;

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let hay: Vec<char> = haystack.chars().map(fold).collect();
        let mut k = 0;
        for want in needle.chars().map(fold) {
            match hay[k..].iter().position(|&c| c == want) {
                Some(off) => k += off + 1,
                None => return false,
            }
        }
        true
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn has_match_iff_subsequence(needle in "[a-cA-C/_-]{0,5}", haystack in "[a-cA-C/_.-]{0,12}") {
            prop_assert_eq!(has_match(&needle, &haystack), is_subsequence(&needle, &haystack));
        }

        #[test]
        fn self_score_is_perfect(s in "[a-zA-Z0-9/_. -]{1,40}") {
            prop_assert_eq!(score(&s, &s), SCORE_MAX);
            prop_assert_eq!(score(&s.to_uppercase(), &s), SCORE_MAX);
        }

        #[test]
        fn same_length_mismatch_is_impossible(pairs in proptest::collection::vec(("[a-d]", "[a-d]"), 1..8)) {
            let a: String = pairs.iter().map(|(x, _)| x.as_str()).collect();
            let b: String = pairs.iter().map(|(_, y)| y.as_str()).collect();
            prop_assume!(a != b);
            prop_assert!(!has_match(&a, &b));
            prop_assert_eq!(score(&a, &b), SCORE_MIN);
        }

        #[test]
        fn positions_are_valid_alignment(needle in "[a-c]{1,4}", haystack in "[a-cA-C/_-]{1,16}") {
            prop_assume!(has_match(&needle, &haystack));
            let found = positions(&needle, &haystack);
            prop_assert!(found.is_some());
            let found = found.unwrap_or_default();
            let hay: Vec<char> = haystack.chars().map(fold).collect();
            let want: Vec<char> = needle.chars().map(fold).collect();

            prop_assert_eq!(found.len(), want.len());
            prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
            for (k, &j) in found.iter().enumerate() {
                prop_assert!(j < hay.len());
                prop_assert_eq!(hay[j], want[k]);
            }
        }

        #[test]
        fn matching_pairs_score_above_min(needle in "[a-c]{1,4}", haystack in "[a-c/]{1,16}") {
            prop_assume!(has_match(&needle, &haystack));
            prop_assert!(score(&needle, &haystack) > SCORE_MIN);
        }
    }
}
