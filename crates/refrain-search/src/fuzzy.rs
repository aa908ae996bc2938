//! Approximate string matching by sequence-matcher ratio.
//!
//! [`SequenceMatcher`] finds the longest common block between two strings,
//! then recurses on the unmatched text to its left and right (the
//! Ratcliff/Obershelp "gestalt" approach). The similarity ratio is
//! `2 * M / T`, where `M` is the number of matched characters and `T` the
//! total length of both strings. [`close_matches`] ranks a candidate list by
//! that ratio.

use std::collections::HashMap;

/// Second sequences at least this long get the popular-element heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A pair of character sequences compared by matching blocks.
///
/// Comparisons are over Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each character of `b`, ascending, minus popular ones.
    b2j: HashMap<char, Vec<usize>>,
    /// Character counts of `b`, built on first use by `quick_ratio`.
    full_b_count: Option<HashMap<char, usize>>,
}

impl SequenceMatcher {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let mut matcher = Self {
            a: Vec::new(),
            b: Vec::new(),
            b2j: HashMap::new(),
            full_b_count: None,
        };
        matcher.set_seq2(b);
        matcher.set_seq1(a);
        matcher
    }

    /// Replace the first sequence, keeping the analysis of the second.
    pub fn set_seq1(&mut self, a: &str) {
        self.a = a.chars().collect();
    }

    /// Replace the second sequence and rebuild its position table.
    pub fn set_seq2(&mut self, b: &str) {
        self.b = b.chars().collect();
        self.full_b_count = None;

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in self.b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        // In long sequences, characters that make up more than 1% of the text
        // are too common to seed a match.
        let n = self.b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let limit = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        self.b2j = b2j;
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns `(i, j, size)`. Among equally long blocks the one starting
    /// earliest in `a`, then earliest in `b`, wins.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] is the length of the match ending at a[i - 1] and b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters never seed a block, but a block may still grow
        // over them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// Total number of characters covered by matching blocks.
    pub fn matching_characters(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// Similarity in `[0, 1]`: `2 * M / T`. Two empty strings score `1.0`.
    pub fn ratio(&self) -> f64 {
        score(self.matching_characters(), self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared character counts,
    /// ignoring order.
    pub fn quick_ratio(&mut self) -> f64 {
        let full_b_count = self.full_b_count.get_or_insert_with(|| {
            let mut counts = HashMap::new();
            for &ch in &self.b {
                *counts.entry(ch).or_insert(0) += 1;
            }
            counts
        });

        let mut available: HashMap<char, usize> = HashMap::new();
        let mut matched = 0;
        for &ch in &self.a {
            let left = available
                .entry(ch)
                .or_insert_with(|| full_b_count.get(&ch).copied().unwrap_or(0));
            if *left > 0 {
                *left -= 1;
                matched += 1;
            }
        }

        score(matched, self.a.len() + self.b.len())
    }

    /// Cheapest upper bound on [`ratio`](Self::ratio), from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        score(la.min(lb), la + lb)
    }
}

fn score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

/// A candidate that scored at or above the cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseMatch {
    /// Index of the candidate in the slice passed to [`close_matches`].
    pub index: usize,
    pub score: f64,
}

/// The best `limit` candidates whose ratio against `word` is at least
/// `cutoff`, best first.
///
/// Ties on score are ordered by candidate text, descending. A candidate
/// string listed twice is matched (and may be returned) twice.
pub fn close_matches<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    limit: usize,
    cutoff: f64,
) -> Vec<CloseMatch> {
    if limit == 0 || !(0.0..=1.0).contains(&cutoff) {
        return Vec::new();
    }

    let mut matcher = SequenceMatcher::new("", word);
    let mut matches = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        matcher.set_seq1(candidate.as_ref());
        if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
            continue;
        }
        let ratio = matcher.ratio();
        if ratio >= cutoff {
            matches.push(CloseMatch {
                index,
                score: ratio,
            });
        }
    }

    matches.sort_by(|x, y| {
        y.score
            .total_cmp(&x.score)
            .then_with(|| candidates[y.index].as_ref().cmp(candidates[x.index].as_ref()))
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(a: &str, b: &str) -> f64 {
        SequenceMatcher::new(a, b).ratio()
    }

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_identical_strings() {
        assert!(approx(ratio("love story", "love story"), 1.0));
    }

    #[test]
    fn test_disjoint_strings() {
        assert!(approx(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_both_empty() {
        assert!(approx(ratio("", ""), 1.0));
    }

    #[test]
    fn test_one_empty() {
        assert!(approx(ratio("", "abc"), 0.0));
    }

    #[test]
    fn test_ratio_counts_recursive_blocks() {
        // " story" (6), then "l" and "v" on the left: 8 of 19 characters.
        assert!(approx(ratio("love story", "luv story"), 16.0 / 19.0));
    }

    #[test]
    fn test_ratio_is_order_sensitive() {
        // "abcd" vs "bcda": longest block "bcd", nothing left on either side
        // that lines up.
        assert!(approx(ratio("abcd", "bcda"), 6.0 / 8.0));
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let matcher = SequenceMatcher::new("abxab", "ab");
        assert_eq!(matcher.find_longest_match(0, 5, 0, 2), (0, 0, 2));
    }

    #[test]
    fn test_unicode_characters() {
        assert!(approx(ratio("café", "cafe"), 6.0 / 8.0));
    }

    #[test]
    fn test_quick_ratios_bound_ratio() {
        let pairs = [
            ("love story", "luv story"),
            ("taylor swift", "tailor swift"),
            ("abcd", "dcba"),
            ("shake it off", "xyzzy"),
        ];
        for (a, b) in pairs {
            let mut matcher = SequenceMatcher::new(a, b);
            let r = matcher.ratio();
            assert!(matcher.quick_ratio() >= r - 1e-12, "{a} / {b}");
            assert!(matcher.real_quick_ratio() >= r - 1e-12, "{a} / {b}");
        }
    }

    #[test]
    fn test_popular_characters_do_not_seed_blocks() {
        // 'a' makes up far more than 1% of a 300-character sequence, so only
        // 'x' can seed a block, and nothing else lines up around it.
        let long = format!("x{}", "a".repeat(299));
        let matcher = SequenceMatcher::new("aaax", &long);
        assert_eq!(matcher.matching_characters(), 1);
    }

    #[test]
    fn test_blocks_grow_over_popular_characters() {
        let long = "a".repeat(300);
        let matcher = SequenceMatcher::new("aaa", &long);
        assert_eq!(matcher.matching_characters(), 3);
    }

    #[test]
    fn test_close_matches_cutoff_and_order() {
        let candidates = ["ape", "apple", "peach", "puppy"];
        let matches = close_matches("appel", &candidates, 3, 0.6);
        let words: Vec<&str> = matches.iter().map(|m| candidates[m.index]).collect();
        assert_eq!(words, vec!["apple", "ape"]);
    }

    #[test]
    fn test_close_matches_limit() {
        let candidates = ["story", "storm", "stork", "store", "stony", "stove"];
        let matches = close_matches("story", &candidates, 2, 0.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(candidates[matches[0].index], "story");
    }

    #[test]
    fn test_close_matches_ties_by_descending_text() {
        let candidates = ["abx", "aby", "abz"];
        let matches = close_matches("ab", &candidates, 3, 0.5);
        let words: Vec<&str> = matches.iter().map(|m| candidates[m.index]).collect();
        assert_eq!(words, vec!["abz", "aby", "abx"]);
    }

    #[test]
    fn test_close_matches_keeps_duplicates() {
        let candidates = ["hello", "hello"];
        let matches = close_matches("hello", &candidates, 5, 0.4);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_close_matches_nothing_above_cutoff() {
        let candidates = ["taylor swift", "love story"];
        assert!(close_matches("xyzzy", &candidates, 5, 0.4).is_empty());
    }

    #[test]
    fn test_close_matches_rejects_bad_arguments() {
        let candidates = ["hello"];
        assert!(close_matches("hello", &candidates, 0, 0.4).is_empty());
        assert!(close_matches("hello", &candidates, 5, 1.5).is_empty());
    }

    #[test]
    fn test_close_match_score_is_full_ratio() {
        let candidates = ["taylor swift", "love story"];
        let matches = close_matches("luv story", &candidates, 5, 0.6);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 1);
        let expected = SequenceMatcher::new("love story", "luv story").ratio();
        assert!((matches[0].score - expected).abs() < f64::EPSILON);
        assert!((matches[0].score - 16.0 / 19.0).abs() < 1e-12);
    }
}
