//! Turns inbound text into the reply text.

use log::debug;

use crate::error::Result;
use crate::intent::{IntentMatcher, MatchConfig};
use crate::keywords::KeywordStore;
use crate::messages::{FALLBACK_MESSAGE, TOPIC_NOT_FOUND_MESSAGE};

/// Keyword store plus its compiled matcher.
#[derive(Debug)]
pub struct Responder {
    store: KeywordStore,
    matcher: IntentMatcher,
}

impl Responder {
    pub fn new(store: KeywordStore, config: MatchConfig) -> Result<Self> {
        let matcher = IntentMatcher::new(&store, config)?;
        Ok(Self { store, matcher })
    }

    #[must_use]
    pub fn store(&self) -> &KeywordStore {
        &self.store
    }

    /// The keyword the text is about, if any.
    #[must_use]
    pub fn extract_intent(&self, text: &str) -> Option<&str> {
        self.matcher.extract_intent(text)
    }

    /// Response for the text's intent, or the fallback message.
    #[must_use]
    pub fn dispatch(&self, text: &str) -> &str {
        match self
            .extract_intent(text)
            .and_then(|keyword| self.store.get(keyword))
        {
            Some(response) => response,
            None => {
                debug!("No intent found, sending fallback");
                FALLBACK_MESSAGE
            }
        }
    }

    /// Response for a keyword chosen directly, e.g. from a button.
    #[must_use]
    pub fn topic_response(&self, keyword: &str) -> &str {
        self.store.get(keyword).unwrap_or(TOPIC_NOT_FOUND_MESSAGE)
    }
}
