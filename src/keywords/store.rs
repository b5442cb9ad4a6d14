//! Immutable keyword → response table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{BotError, Result};

/// Discord rejects messages longer than this.
const MAX_MESSAGE_LEN: usize = 2000;

/// A keyword and its canned response, as declared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub response: String,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            response: response.into(),
        }
    }
}

/// Read-only keyword table, built once at startup.
///
/// Entries keep their declaration order, which is the tie-break order used
/// by the intent matcher. Keywords are unique under case-insensitive
/// comparison and never empty.
#[derive(Debug, Clone)]
pub struct KeywordStore {
    entries: Vec<KeywordEntry>,
}

impl KeywordStore {
    /// Validate and build a store from entries in declaration order.
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(BotError::EmptyKeywordStore);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if entry.keyword.trim().is_empty() {
                return Err(BotError::EmptyKeyword(idx));
            }
            if entry.response.trim().is_empty() {
                return Err(BotError::EmptyResponse(entry.keyword.clone()));
            }
            if !seen.insert(entry.keyword.to_lowercase()) {
                return Err(BotError::DuplicateKeyword(entry.keyword.clone()));
            }
            if entry.response.chars().count() > MAX_MESSAGE_LEN {
                warn!(
                    "Response for '{}' exceeds {MAX_MESSAGE_LEN} characters and may be rejected",
                    entry.keyword
                );
            }
        }

        debug!("Keyword store built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{"keyword", "response"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<KeywordEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a keyword file from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        info!("Loading keywords from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| BotError::KeywordFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Case-insensitive response lookup.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entry(keyword).map(|entry| entry.response.as_str())
    }

    /// Case-insensitive entry lookup.
    #[must_use]
    pub fn entry(&self, keyword: &str) -> Option<&KeywordEntry> {
        let keyword = keyword.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.keyword.to_lowercase() == keyword)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Keywords in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.keyword.as_str())
    }

    /// Keywords sorted alphabetically, for menus and help listings.
    #[must_use]
    pub fn sorted_keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.keywords().collect();
        keywords.sort_unstable();
        keywords
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> KeywordStore {
        KeywordStore::new(vec![
            KeywordEntry::new("plr", "Texto sobre PLR..."),
            KeywordEntry::new("filiação", "Texto sobre filiação..."),
            KeywordEntry::new("campanha salarial", "Texto sobre campanha..."),
        ])
        .expect("valid store")
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = store();
        assert_eq!(store.get("PLR"), Some("Texto sobre PLR..."));
        assert_eq!(store.get("FILIAÇÃO"), Some("Texto sobre filiação..."));
        assert_eq!(store.get("  plr "), Some("Texto sobre PLR..."));
        assert!(store.get("vales").is_none());
    }

    #[test]
    fn keeps_declaration_order() {
        let store = store();
        let keywords: Vec<&str> = store.keywords().collect();
        assert_eq!(keywords, ["plr", "filiação", "campanha salarial"]);
        assert_eq!(
            store.sorted_keywords(),
            ["campanha salarial", "filiação", "plr"]
        );
    }

    #[test]
    fn rejects_empty_store() {
        assert!(matches!(
            KeywordStore::new(Vec::new()),
            Err(BotError::EmptyKeywordStore)
        ));
    }

    #[test]
    fn rejects_blank_keyword() {
        let result = KeywordStore::new(vec![
            KeywordEntry::new("plr", "a"),
            KeywordEntry::new("   ", "b"),
        ]);
        assert!(matches!(result, Err(BotError::EmptyKeyword(1))));
    }

    #[test]
    fn rejects_empty_response() {
        let result = KeywordStore::new(vec![KeywordEntry::new("plr", "")]);
        assert!(matches!(result, Err(BotError::EmptyResponse(k)) if k == "plr"));
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        let result = KeywordStore::new(vec![
            KeywordEntry::new("PLR", "a"),
            KeywordEntry::new("plr", "b"),
        ]);
        assert!(matches!(result, Err(BotError::DuplicateKeyword(k)) if k == "plr"));
    }

    #[test]
    fn parses_json_in_order() {
        let json = r#"[
            {"keyword": "vales", "response": "Vale refeição\ne alimentação"},
            {"keyword": "plr", "response": "PLR"}
        ]"#;
        let store = KeywordStore::from_json_str(json).expect("valid json");
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].keyword, "vales");
        assert_eq!(store.get("vales"), Some("Vale refeição\ne alimentação"));
    }

    #[test]
    fn example_file_is_valid() {
        let store = KeywordStore::from_json_str(include_str!("../../keywords.example.json"))
            .expect("example file must validate");
        assert_eq!(store.keywords().collect::<Vec<_>>(), ["plr", "plr anual", "filiação"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            KeywordStore::from_json_str(r#"{"plr": "PLR"}"#),
            Err(BotError::KeywordFormat(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/keywords.json");
        match KeywordStore::from_json_file(path) {
            Err(BotError::KeywordFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
