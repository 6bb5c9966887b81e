//! Fuzzy matching over the static surah table
//!
//! Resolves user queries against surah names and numbers. The UI around
//! this lives in the host app; the core only ranks the candidates.

use crate::meta::SURAHS;

/// Largest edit distance still considered a match.
const MAX_DISTANCE: usize = 3;

/// One ranked candidate. Distance 0 is a direct hit (substring of the
/// name, or a digit match on the surah number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahMatch {
    pub number: u16,
    pub name: &'static str,
    pub distance: usize,
}

/// Levenshtein edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Rank all surahs against a query, best first.
///
/// An empty query matches everything. Direct hits score 0; the rest score
/// their edit distance against the lowercased name, and anything past
/// [`MAX_DISTANCE`] is dropped. The sort is stable, so ties keep canonical
/// surah order.
pub fn match_surahs(query: &str) -> Vec<SurahMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SURAHS
            .iter()
            .map(|s| SurahMatch {
                number: s.number,
                name: s.name,
                distance: 0,
            })
            .collect();
    }

    let mut matches: Vec<SurahMatch> = SURAHS
        .iter()
        .map(|s| {
            let name_lower = s.name.to_lowercase();
            let distance = if name_lower.contains(&query)
                || s.number.to_string().contains(&query)
            {
                0
            } else {
                levenshtein(&name_lower, &query)
            };
            SurahMatch {
                number: s.number,
                name: s.name,
                distance,
            }
        })
        .filter(|m| m.distance <= MAX_DISTANCE)
        .collect();

    matches.sort_by_key(|m| m.distance);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("yunus", "yunus"), 0);
    }

    #[test]
    fn test_substring_is_direct_hit() {
        let matches = match_surahs("baqa");
        assert_eq!(matches[0].number, 2);
        assert_eq!(matches[0].distance, 0);
    }

    #[test]
    fn test_number_query() {
        let matches = match_surahs("114");
        assert!(matches.iter().any(|m| m.number == 114 && m.distance == 0));
    }

    #[test]
    fn test_typo_within_tolerance() {
        // "yusef" vs "yusuf": one substitution.
        let matches = match_surahs("yusef");
        assert!(matches.iter().any(|m| m.number == 12));
    }

    #[test]
    fn test_garbage_matches_nothing() {
        assert!(match_surahs("xxxxxxxxxxxxxxx").is_empty());
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(match_surahs("").len(), 114);
        assert_eq!(match_surahs("   ").len(), 114);
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let all = match_surahs("");
        let numbers: Vec<u16> = all.iter().map(|m| m.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }
}
