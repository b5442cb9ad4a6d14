//! Intent extraction: which keyword, if any, a message is about.

mod matcher;
mod similarity;

pub use matcher::IntentMatcher;
pub use similarity::Similarity;

/// Default cutoff for the fuzzy fallback.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Matching configuration.
pub struct MatchConfig {
    /// Run the fuzzy stage when no keyword appears as a whole word.
    pub fuzzy_enabled: bool,
    /// Minimum similarity for a fuzzy match, in `[0, 1]`.
    pub fuzzy_threshold: f64,
    pub similarity: Similarity,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fuzzy_enabled: true,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            similarity: Similarity::default(),
        }
    }
}

impl MatchConfig {
    /// Word-boundary matching only.
    #[must_use]
    pub fn exact_only() -> Self {
        Self {
            fuzzy_enabled: false,
            ..Self::default()
        }
    }
}
