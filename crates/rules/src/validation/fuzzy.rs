//! Fuzzy string matching for "did you mean" suggestions on unknown params keys.

/// Find the closest match using Levenshtein distance. Returns None if best
/// distance exceeds half the longer string (too dissimilar).
pub(crate) fn fuzzy_match<'a, S: AsRef<str>>(input: &str, candidates: &'a [S]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let dist = levenshtein(&input_lower, &candidate.to_lowercase());
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    best.and_then(|(name, dist)| {
        let max_len = input.len().max(name.len());
        if dist <= max_len / 2 {
            Some(name)
        } else {
            None
        }
    })
}

/// Levenshtein edit distance between two strings.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_THRESHOLD_FIELDS: &[&str] = &[
        "index",
        "threshold",
        "thresholdComparator",
        "timeField",
        "timeWindowSize",
        "timeWindowUnit",
        "aggField",
        "aggType",
        "groupBy",
        "termField",
        "termSize",
    ];

    #[test]
    fn levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn fuzzy_match_finds_close() {
        assert_eq!(fuzzy_match("timeFeild", INDEX_THRESHOLD_FIELDS), Some("timeField"));
        assert_eq!(fuzzy_match("time_window_size", INDEX_THRESHOLD_FIELDS), Some("timeWindowSize"));
    }

    #[test]
    fn fuzzy_match_is_case_insensitive() {
        assert_eq!(fuzzy_match("INDEX", INDEX_THRESHOLD_FIELDS), Some("index"));
    }

    #[test]
    fn fuzzy_match_rejects_distant() {
        assert_eq!(fuzzy_match("zzzzzzzzzzzzz", INDEX_THRESHOLD_FIELDS), None);
    }

    #[test]
    fn fuzzy_match_accepts_owned_candidates() {
        let owned = vec!["esQuery".to_string(), "esqlQuery".to_string()];
        assert_eq!(fuzzy_match("esquery", &owned), Some("esQuery"));
    }
}
