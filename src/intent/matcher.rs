//! Two-stage keyword matching: whole-word hits first, fuzzy fallback second.

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::keywords::KeywordStore;

use super::MatchConfig;

#[derive(Debug)]
struct Candidate {
    keyword: String,
    lowered: Vec<char>,
    pattern: Regex,
}

/// Compiled matcher over a keyword store.
///
/// Holds no mutable state, so one instance can serve any number of tasks.
#[derive(Debug)]
pub struct IntentMatcher {
    /// Declaration order.
    candidates: Vec<Candidate>,
    /// Indices into `candidates`, longest keyword first.
    by_length: Vec<usize>,
    config: MatchConfig,
}

impl IntentMatcher {
    pub fn new(store: &KeywordStore, config: MatchConfig) -> Result<Self> {
        let candidates = store
            .keywords()
            .map(|keyword| -> Result<Candidate> {
                let lowered = keyword.to_lowercase();
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&lowered)))?;
                Ok(Candidate {
                    keyword: keyword.to_string(),
                    lowered: lowered.chars().collect(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut by_length: Vec<usize> = (0..candidates.len()).collect();
        // Stable sort keeps declaration order among equal lengths.
        by_length.sort_by(|&a, &b| {
            candidates[b]
                .lowered
                .len()
                .cmp(&candidates[a].lowered.len())
        });

        debug!(
            "Intent matcher ready: {} keywords, fuzzy={}, threshold={}, similarity={}",
            candidates.len(),
            config.fuzzy_enabled,
            config.fuzzy_threshold,
            config.similarity
        );

        Ok(Self {
            candidates,
            by_length,
            config,
        })
    }

    /// Returns the keyword the text is about, as declared in the store.
    #[must_use]
    pub fn extract_intent(&self, text: &str) -> Option<&str> {
        let normalized = text.to_lowercase();
        let normalized = normalized.trim();

        if let Some(keyword) = self.exact_match(normalized) {
            debug!("Intent match: word hit '{keyword}'");
            return Some(keyword);
        }

        if !self.config.fuzzy_enabled {
            return None;
        }

        self.fuzzy_match(normalized)
    }

    fn exact_match(&self, normalized: &str) -> Option<&str> {
        self.by_length
            .iter()
            .map(|&idx| &self.candidates[idx])
            .find(|candidate| candidate.pattern.is_match(normalized))
            .map(|candidate| candidate.keyword.as_str())
    }

    fn fuzzy_match(&self, normalized: &str) -> Option<&str> {
        let text: Vec<char> = normalized.chars().collect();
        let threshold = self.config.fuzzy_threshold;
        let similarity = self.config.similarity;
        let mut best: Option<(&Candidate, f64)> = None;

        for candidate in &self.candidates {
            if similarity.upper_bound(candidate.lowered.len(), text.len()) < threshold {
                continue;
            }
            let score = similarity.ratio(&candidate.lowered, &text);
            if score < threshold {
                continue;
            }
            // Strictly greater, so ties keep the earlier declaration.
            let is_better = best
                .as_ref()
                .is_none_or(|(_, best_score)| score > *best_score);
            if is_better {
                best = Some((candidate, score));
            }
        }

        best.map(|(candidate, score)| {
            debug!(
                "Intent match: fuzzy hit (text='{normalized}', keyword='{}', sim={score:.3})",
                candidate.keyword
            );
            candidate.keyword.as_str()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Similarity;
    use crate::keywords::KeywordEntry;

    fn store(keywords: &[&str]) -> KeywordStore {
        KeywordStore::new(
            keywords
                .iter()
                .map(|k| KeywordEntry::new(*k, format!("Texto sobre {k}")))
                .collect(),
        )
        .expect("valid store")
    }

    fn matcher(keywords: &[&str]) -> IntentMatcher {
        IntentMatcher::new(&store(keywords), MatchConfig::default()).expect("valid matcher")
    }

    #[test]
    fn finds_keyword_inside_sentence() {
        let m = matcher(&["plr", "filiação"]);
        assert_eq!(m.extract_intent("Quero saber sobre a plr deste ano"), Some("plr"));
        assert_eq!(m.extract_intent("como funciona a filiação?"), Some("filiação"));
    }

    #[test]
    fn every_keyword_is_found_as_a_word() {
        let keywords = ["plr", "licença saúde", "campanha salarial", "filiação", "vales"];
        let m = matcher(&keywords);
        for keyword in keywords {
            let text = format!("olá, {keyword}, por favor");
            assert_eq!(m.extract_intent(&text), Some(keyword));
        }
    }

    #[test]
    fn longer_keyword_takes_precedence() {
        let m = matcher(&["plr", "plr anual"]);
        assert_eq!(m.extract_intent("me fale da plr anual"), Some("plr anual"));
        assert_eq!(m.extract_intent("me fale da plr"), Some("plr"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = matcher(&["plr", "filiação"]);
        assert_eq!(m.extract_intent("PLR"), m.extract_intent("plr"));
        assert_eq!(m.extract_intent("PLR"), Some("plr"));
        assert_eq!(m.extract_intent("  FILIAÇÃO  "), Some("filiação"));
    }

    #[test]
    fn returns_keyword_as_declared() {
        let m = matcher(&["PLR"]);
        assert_eq!(m.extract_intent("quero a plr"), Some("PLR"));
    }

    #[test]
    fn respects_word_boundaries() {
        let m = IntentMatcher::new(&store(&["plr"]), MatchConfig::exact_only())
            .expect("valid matcher");
        assert_eq!(m.extract_intent("semplrar"), None);
        assert_eq!(m.extract_intent("plr_anual"), None);
        assert_eq!(m.extract_intent("(plr)"), Some("plr"));
    }

    #[test]
    fn embedded_keyword_stays_unmatched_with_fuzzy() {
        // ratio("plr", "semplrar") = 6/11
        let m = matcher(&["plr", "filiação"]);
        assert_eq!(m.extract_intent("semplrar"), None);
    }

    #[test]
    fn unrelated_text_has_no_intent() {
        let m = matcher(&["plr", "filiação"]);
        assert_eq!(m.extract_intent("xyz123"), None);
        assert_eq!(m.extract_intent(""), None);
        assert_eq!(m.extract_intent("   "), None);
    }

    #[test]
    fn fuzzy_fallback_catches_typos() {
        let m = matcher(&["plr", "filiação", "campanha salarial"]);
        assert_eq!(m.extract_intent("filiacao"), Some("filiação"));
        assert_eq!(m.extract_intent("Campanha Salarail"), Some("campanha salarial"));
    }

    #[test]
    fn fuzzy_fallback_respects_threshold() {
        let m = matcher(&["plr"]);
        // ratio("plr", "plt") = 4/6
        assert_eq!(m.extract_intent("plt"), None);

        let lenient = IntentMatcher::new(
            &store(&["plr"]),
            MatchConfig {
                fuzzy_threshold: 0.6,
                ..MatchConfig::default()
            },
        )
        .expect("valid matcher");
        assert_eq!(lenient.extract_intent("plt"), Some("plr"));
    }

    #[test]
    fn fuzzy_can_be_disabled() {
        let m = IntentMatcher::new(&store(&["filiação"]), MatchConfig::exact_only())
            .expect("valid matcher");
        assert_eq!(m.extract_intent("filiacao"), None);
    }

    #[test]
    fn fuzzy_ties_go_to_first_declared() {
        // "casa3" scores 0.8 against both.
        let m = matcher(&["casa1", "casa2"]);
        assert_eq!(m.extract_intent("casa3"), Some("casa1"));

        let m = matcher(&["casa2", "casa1"]);
        assert_eq!(m.extract_intent("casa3"), Some("casa2"));
    }

    #[test]
    fn levenshtein_similarity_is_selectable() {
        let m = IntentMatcher::new(
            &store(&["filiação"]),
            MatchConfig {
                similarity: Similarity::Levenshtein,
                ..MatchConfig::default()
            },
        )
        .expect("valid matcher");
        assert_eq!(m.extract_intent("filiacao"), Some("filiação"));
        assert_eq!(m.extract_intent("xyz123"), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let m = matcher(&["plr", "filiação"]);
        for text in ["a plr", "filiacao", "xyz123"] {
            assert_eq!(m.extract_intent(text), m.extract_intent(text));
        }
    }

    #[test]
    fn shared_across_threads() {
        let m = matcher(&["plr", "filiação"]);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| m.extract_intent("Quero saber sobre a plr")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("thread panicked"), Some("plr"));
            }
        });
    }
}
