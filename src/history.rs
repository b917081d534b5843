// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request URL history
//!
//! The history is a deduplicated set of previously submitted URLs, kept
//! in insertion order and persisted as a JSON array of strings under
//! [`HISTORY_KEY`]. Loading fails open: anything unreadable counts as
//! an empty history rather than an error.

use serde_json::Value;
use url::Url;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized history
pub const HISTORY_KEY: &str = "request_history";

/// Deduplicated set of request URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    urls: Vec<Url>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized history, skipping anything that is not a URL string
    pub fn from_json(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Stored history is not valid JSON, starting empty");
                return Self::new();
            }
        };

        let Value::Array(entries) = value else {
            tracing::warn!("Stored history is not an array, starting empty");
            return Self::new();
        };

        let mut history = Self::new();
        for entry in entries {
            match entry {
                Value::String(s) => match Url::parse(&s) {
                    Ok(url) => {
                        history.insert(url);
                    }
                    Err(e) => tracing::warn!(entry = %s, error = %e, "Skipping unparsable history entry"),
                },
                other => tracing::warn!(entry = %other, "Skipping non-string history entry"),
            }
        }
        history
    }

    /// Serialize as a JSON array of URL strings
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_strings())?)
    }

    /// Add a URL. Returns false if an equal URL is already present.
    pub fn insert(&mut self, url: Url) -> bool {
        if self.contains(&url) {
            return false;
        }
        self.urls.push(url);
        true
    }

    /// Check membership by normalized URL string
    pub fn contains(&self, url: &Url) -> bool {
        self.urls.iter().any(|u| u.as_str() == url.as_str())
    }

    /// Oldest entry
    pub fn first(&self) -> Option<&Url> {
        self.urls.first()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.urls.iter()
    }

    /// URL strings in insertion order
    pub fn to_strings(&self) -> Vec<String> {
        self.urls.iter().map(|u| u.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<Url> for History {
    fn from_iter<I: IntoIterator<Item = Url>>(iter: I) -> Self {
        let mut history = Self::new();
        for url in iter {
            history.insert(url);
        }
        history
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reads and writes the history slot of a key-value store
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Use the default [`HISTORY_KEY`] slot
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// Use a custom slot
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the stored history. Never fails.
    pub fn load(&self) -> History {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => History::from_json(&raw),
            Ok(None) => History::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "History read failed, starting empty");
                History::new()
            }
        }
    }

    /// Overwrite the stored history
    pub fn save(&self, history: &History) -> Result<()> {
        self.store.set(&self.key, &history.to_json()?)?;
        tracing::debug!(key = %self.key, entries = history.len(), "History saved");
        Ok(())
    }

    /// Load, add `url`, save. Returns whether the URL was new.
    pub fn record(&self, url: &Url) -> Result<bool> {
        let mut history = self.load();
        let added = history.insert(url.clone());
        self.save(&history)?;
        Ok(added)
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_absent_key_is_empty() {
        let store = HistoryStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_same_url_saved_once() {
        let store = HistoryStore::new(MemoryStore::new());
        let mut history = store.load();
        assert!(history.insert(url("https://api.example.com/items")));
        assert!(!history.insert(url("https://api.example.com/items")));
        store.save(&history).unwrap();

        let raw = store.store().get(HISTORY_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"["https://api.example.com/items"]"#);
    }

    #[test]
    fn test_dedup_uses_normalized_form() {
        let mut history = History::new();
        assert!(history.insert(url("https://example.com")));
        assert!(!history.insert(url("HTTPS://EXAMPLE.com/")));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let raw = r#"["https://a.example/x","https://b.example/y?q=1","http://localhost:8080/"]"#;
        let store = HistoryStore::new(MemoryStore::with_item(HISTORY_KEY, raw));

        let loaded = store.load();
        store.save(&loaded).unwrap();
        let reloaded = store.load();

        assert_eq!(loaded, reloaded);
        assert_eq!(reloaded.len(), 3);
        assert!(reloaded.contains(&url("https://b.example/y?q=1")));
    }

    #[test]
    fn test_malformed_storage_falls_back_to_empty() {
        for raw in ["not json", "{\"a\":1}", "42", "\"https://example.com\"", ""] {
            let store = HistoryStore::new(MemoryStore::with_item(HISTORY_KEY, raw));
            assert!(store.load().is_empty(), "expected empty history for {:?}", raw);
        }
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let raw = r#"["https://ok.example/", "not a url", 7, null, "https://ok.example/"]"#;
        let history = History::from_json(raw);
        assert_eq!(history.to_strings(), vec!["https://ok.example/".to_string()]);
    }

    #[test]
    fn test_record_appends_in_order() {
        let store = HistoryStore::new(MemoryStore::new());
        assert!(store.record(&url("https://one.example/")).unwrap());
        assert!(store.record(&url("https://two.example/")).unwrap());
        assert!(!store.record(&url("https://one.example/")).unwrap());

        let history = store.load();
        assert_eq!(history.first(), Some(&url("https://one.example/")));
        assert_eq!(history.len(), 2);
    }
}
