//! Stopword tables.
//!
//! Closed-class words (particles, pronouns, prepositions with attached
//! pronouns) are resolved by direct lookup instead of segmentation.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::arabic::stopwords::{StopwordDictionary, StopwordTable};
//!
//! let table = StopwordDictionary::from_json(r#"{"وفي": {"stem": "في"}}"#).unwrap();
//! assert!(table.is_stopword("وفي"));
//! assert_eq!(table.stem_of("وفي").as_deref(), Some("في"));
//! assert_eq!(table.root_of("وفي").as_deref(), Some("في"));
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::arabic::normalize::strip_tashkeel;
use crate::error::{Result, StemmerError};

const BUNDLED_STOPWORDS: &str = include_str!("../../resources/stopwords.json");

/// Lookup of precomputed stems and roots for stopwords.
///
/// Matching is exact on the raw word.
pub trait StopwordTable: Send + Sync + std::fmt::Debug {
    fn is_stopword(&self, word: &str) -> bool;

    /// The precomputed stem, without diacritics.
    fn stem_of(&self, word: &str) -> Option<String>;

    /// The precomputed root, without diacritics.
    fn root_of(&self, word: &str) -> Option<String>;
}

/// One stopword record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordEntry {
    pub stem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

/// A stopword table loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct StopwordDictionary {
    entries: AHashMap<String, StopwordEntry>,
}

static BUNDLED: LazyLock<StopwordDictionary> = LazyLock::new(|| {
    StopwordDictionary::from_json(BUNDLED_STOPWORDS).unwrap_or_else(|e| {
        log::warn!("bundled stopword table is unreadable: {e}");
        StopwordDictionary::default()
    })
});

impl StopwordDictionary {
    /// Parse a table of the form `{"word": {"stem": "...", "root": "..."}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: AHashMap<String, StopwordEntry> = serde_json::from_str(json)?;
        for (word, entry) in &entries {
            if entry.stem.is_empty() {
                return Err(StemmerError::resource(format!(
                    "stopword '{word}' has an empty stem"
                )));
            }
        }
        Ok(StopwordDictionary { entries })
    }

    /// Load a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// The table shipped with the crate.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    /// Iterate over the listed words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StopwordTable for StopwordDictionary {
    fn is_stopword(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    fn stem_of(&self, word: &str) -> Option<String> {
        self.entries
            .get(word)
            .map(|entry| strip_tashkeel(&entry.stem).into_owned())
    }

    fn root_of(&self, word: &str) -> Option<String> {
        self.entries.get(word).map(|entry| {
            let root = entry.root.as_deref().unwrap_or(&entry.stem);
            strip_tashkeel(root).into_owned()
        })
    }
}
