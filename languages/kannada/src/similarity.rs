use std::cmp::Ordering;

use nudi_core::types::Suggestion;

/// Levenshtein distance over code points
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized similarity in [0, 1]; two empty strings are identical
pub fn similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f32 / max_len as f32
}

/// Score `candidates` against `query` and keep the best `limit` at or above
/// `min_score`. Ties are broken by the candidate text so output is stable.
pub fn rank<I, S>(query: &str, candidates: I, limit: usize, min_score: f32) -> Vec<Suggestion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scored: Vec<Suggestion> = candidates
        .into_iter()
        .map(|c| Suggestion {
            similarity: similarity(query, c.as_ref()),
            word: c.as_ref().to_string(),
        })
        .filter(|s| s.similarity >= min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    scored.dedup_by(|a, b| a.word == b.word);
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basics() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("ಮನೆ", "ಮನೆ"), 0);
        assert_eq!(levenshtein_distance("ಮನೆ", "ಮನ"), 1);
    }

    #[test]
    fn test_identity_and_empty() {
        for x in ["", "a", "ಕನ್ನಡ", "xyz123"] {
            assert_eq!(similarity(x, x), 1.0);
        }
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let pairs = [("ಮನೆ", "ಮನೆಗೆ"), ("kitten", "sitting"), ("ಪುಸ್ತಕ", "ಪುಸ್ತಕಗಳು"), ("a", "")];
        for (x, y) in pairs {
            let s = similarity(x, y);
            assert_eq!(s, similarity(y, x));
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_rank_orders_and_limits() {
        let keys = ["ಮನೆ", "ಮನ", "ನೀರು", "ಮನೆಗೆ", "ಮನೆ"];
        let ranked = rank("ಮನೆ", keys, 2, 0.4);
        let words: Vec<_> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["ಮನೆ", "ಮನ"]);
        assert_eq!(ranked[0].similarity, 1.0);
    }

    #[test]
    fn test_rank_respects_threshold() {
        let ranked = rank("ಮನೆ", ["ನೀರು", "xyz"], 5, 0.5);
        assert!(ranked.is_empty());
    }
}
