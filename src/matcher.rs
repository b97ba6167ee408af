//! Suggestion filtering and ranking.
//!
//! Pure functions that match a candidate pool against the in-progress query.
//! The default rule is a case-insensitive word-prefix match: the query must
//! occur at the start of a candidate name or immediately after whitespace.
//! The query is arbitrary user text, so it is escaped with [`regex::escape`]
//! before any pattern is built.

use regex::Regex;
use tracing::trace;

use crate::tag::{Tag, TagKind};

/// A user-supplied filter predicate. Receives the candidate and the query and
/// fully replaces the default word-prefix rule.
pub type FilterPredicate = dyn Fn(&Tag, &str) -> bool;

/// Build the default word-prefix pattern for a query.
fn word_prefix_pattern(query: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)(?:^|\s){}", regex::escape(query))).ok()
}

/// Filter `pool` against `query` and rank the result.
///
/// The result is truncated to `limit` entries after filtering. If nothing
/// matched and `no_suggestions_text` is set, a single synthetic disabled
/// candidate carrying that text is returned instead. Entries of
/// [`TagKind::Group`] are ordered before all others; relative order is
/// otherwise preserved.
pub fn filter_suggestions(
    query: &str,
    pool: &[Tag],
    limit: usize,
    predicate: Option<&FilterPredicate>,
    no_suggestions_text: Option<&str>,
) -> Vec<Tag> {
    let mut filtered: Vec<Tag> = match predicate {
        Some(pred) => pool.iter().filter(|tag| pred(tag, query)).cloned().collect(),
        None => {
            // The escaped query is a literal, so the pattern always compiles.
            let Some(pattern) = word_prefix_pattern(query) else {
                return Vec::new();
            };
            pool.iter()
                .filter(|tag| pattern.is_match(&tag.name))
                .cloned()
                .collect()
        }
    };

    filtered.truncate(limit);

    if filtered.is_empty() {
        if let Some(text) = no_suggestions_text {
            filtered.push(Tag::new(text).disabled());
        }
    }

    // Stable sort: groups first, relative order otherwise untouched.
    filtered.sort_by_key(|tag| tag.kind != TagKind::Group);

    trace!(query, matched = filtered.len(), "filtered suggestions");
    filtered
}

/// Find a case-insensitive full-string match of `query` among `options`.
pub fn find_exact(options: &[Tag], query: &str) -> Option<usize> {
    let query = query.to_lowercase();
    options.iter().position(|tag| tag.name.to_lowercase() == query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<Tag> {
        names.iter().copied().map(Tag::new).collect()
    }

    #[test]
    fn test_word_prefix_match() {
        let pool = pool(&["France", "Germany", "San Marino"]);

        let out = filter_suggestions("fr", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "France");

        // Matches after a whitespace boundary too.
        let out = filter_suggestions("mar", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "San Marino");

        // But not mid-word.
        let out = filter_suggestions("an", &pool, 6, None, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let pool = pool(&["France"]);
        let out = filter_suggestions("FRA", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pool = pool(&["a+b", "ab", "c (draft)", "x.y"]);

        let out = filter_suggestions("a+", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "a+b");

        let out = filter_suggestions("c (", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "c (draft)");

        let out = filter_suggestions("x.", &pool, 6, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "x.y");
    }

    #[test]
    fn test_limit_applied_after_filtering() {
        let pool = pool(&["aa", "ab", "ac", "ad"]);
        let out = filter_suggestions("a", &pool, 2, None, None);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "aa");
        assert_eq!(out[1].name, "ab");
    }

    #[test]
    fn test_no_suggestions_placeholder() {
        let pool = pool(&["France"]);
        let out = filter_suggestions("zzz", &pool, 6, None, Some("No suggestions found"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "No suggestions found");
        assert!(out[0].disabled);
    }

    #[test]
    fn test_no_placeholder_when_unset() {
        let pool = pool(&["France"]);
        let out = filter_suggestions("zzz", &pool, 6, None, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_groups_ranked_first() {
        let pool = vec![
            Tag::new("alpha"),
            Tag::new("all").kind(TagKind::Group),
            Tag::new("also"),
            Tag::new("always").kind(TagKind::Group),
        ];
        let out = filter_suggestions("al", &pool, 6, None, None);
        let kinds: Vec<TagKind> = out.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TagKind::Group, TagKind::Group, TagKind::Item, TagKind::Item]
        );
        // Relative order preserved within each partition.
        assert_eq!(out[0].name, "all");
        assert_eq!(out[1].name, "always");
        assert_eq!(out[2].name, "alpha");
        assert_eq!(out[3].name, "also");
    }

    #[test]
    fn test_custom_predicate_replaces_default() {
        let pool = pool(&["France", "Germany"]);
        let contains = |tag: &Tag, query: &str| tag.name.to_lowercase().contains(query);
        let out = filter_suggestions("man", &pool, 6, Some(&contains), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Germany");
    }

    #[test]
    fn test_find_exact() {
        let options = pool(&["France", "Germany"]);
        assert_eq!(find_exact(&options, "france"), Some(0));
        assert_eq!(find_exact(&options, "GERMANY"), Some(1));
        assert_eq!(find_exact(&options, "fr"), None);
    }
}
