//! Fuzzy keyword search for direct topic lookups and autocomplete.

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use log::debug;

use super::{KeywordEntry, KeywordStore};

/// Find a keyword by exact (case-insensitive) name, falling back to the best
/// fuzzy match.
#[must_use]
pub fn find_keyword<'a>(store: &'a KeywordStore, query: &str) -> Option<&'a KeywordEntry> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    store.entry(query).or_else(|| find_best_fuzzy(store, query))
}

fn find_best_fuzzy<'a>(store: &'a KeywordStore, query: &str) -> Option<&'a KeywordEntry> {
    let matcher = SkimMatcherV2::default();
    let mut best: Option<(&KeywordEntry, i64)> = None;

    for entry in store.entries() {
        let keyword = entry.keyword.as_str();
        if let Some(score) = matcher.fuzzy_match(keyword, query) {
            let is_better = best
                .as_ref()
                .is_none_or(|(_, best_score)| score > *best_score);

            if is_better {
                debug!("New best keyword: {keyword} (score: {score})");
                best = Some((entry, score));
            }
        }
    }

    best.map(|(entry, _)| entry)
}

/// Keywords matching a partial query, best first.
///
/// An empty query lists keywords alphabetically.
#[must_use]
pub fn search_keywords<'a>(store: &'a KeywordStore, query: &str, limit: usize) -> Vec<&'a str> {
    if limit == 0 {
        return Vec::new();
    }

    let query = query.trim();
    if query.is_empty() {
        return store.sorted_keywords().into_iter().take(limit).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(&str, i64)> = store
        .keywords()
        .filter_map(|keyword| {
            matcher
                .fuzzy_match(keyword, query)
                .map(|score| (keyword, score))
        })
        .collect();

    scored.sort_by(|(left, left_score), (right, right_score)| {
        right_score.cmp(left_score).then_with(|| left.cmp(right))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(keyword, _)| keyword)
        .collect()
}
