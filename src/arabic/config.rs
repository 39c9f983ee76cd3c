//! Stemmer configuration.
//!
//! `StemmerConfig` is a plain value. Missing fields in a JSON document fall
//! back to the defaults, so a file only needs to name what it overrides:
//!
//! ```
//! use arabic_stemmer::arabic::config::StemmerConfig;
//!
//! let config = StemmerConfig::from_json_str(r#"{"max_prefix_length": 3}"#).unwrap();
//! assert_eq!(config.max_prefix_length, 3);
//! assert_eq!(config.joker, '*');
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::arabic::affixes::DEFAULT_AFFIXES;
use crate::arabic::dictionary::RootList;
use crate::arabic::letters::{
    DEFAULT_INFIX_LETTERS, DEFAULT_JOKER, DEFAULT_MAX_PREFIX, DEFAULT_MAX_SUFFIX,
    DEFAULT_MIN_STEM, DEFAULT_PREFIX_LETTERS, DEFAULT_SUFFIX_LETTERS, LetterClass,
};
use crate::error::Result;

/// Configuration for the light stemmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Letters that may appear in a prefix.
    pub prefix_letters: LetterClass,

    /// Letters that may appear in a suffix.
    pub suffix_letters: LetterClass,

    /// Pattern letters that may be inserted inside a stem.
    pub infix_letters: LetterClass,

    /// Longest prefix considered by the window estimate.
    pub max_prefix_length: usize,

    /// Longest suffix considered by the window estimate.
    pub max_suffix_length: usize,

    /// Shortest stem a segment may leave.
    pub min_stem_length: usize,

    /// Marker for radical positions in starred patterns.
    ///
    /// A longer string in a JSON document is clamped to its first char; an
    /// empty one keeps the default.
    #[serde(deserialize_with = "deserialize_joker")]
    pub joker: char,

    /// Known prefixes.
    pub prefix_list: Vec<String>,

    /// Known suffixes.
    pub suffix_list: Vec<String>,

    /// Known roots.
    pub root_list: Vec<String>,

    /// Valid `prefix-suffix` pairs for verbs.
    pub verb_affix_pairs: Vec<String>,

    /// Valid `prefix-suffix` pairs for nouns.
    pub noun_affix_pairs: Vec<String>,
}

/// The first char of `joker`, or `None` when it is empty.
pub(crate) fn clamp_joker(joker: &str) -> Option<char> {
    let c = joker.chars().next()?;
    if joker.chars().count() > 1 {
        log::debug!("joker {joker:?} clamped to {c:?}");
    }
    Some(c)
}

fn deserialize_joker<'de, D>(deserializer: D) -> std::result::Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let joker = String::deserialize(deserializer)?;
    Ok(clamp_joker(&joker).unwrap_or_else(|| {
        log::warn!("ignoring empty joker, keeping {DEFAULT_JOKER:?}");
        DEFAULT_JOKER
    }))
}

impl Default for StemmerConfig {
    fn default() -> Self {
        let affixes = &*DEFAULT_AFFIXES;
        Self {
            prefix_letters: LetterClass::new(DEFAULT_PREFIX_LETTERS),
            suffix_letters: LetterClass::new(DEFAULT_SUFFIX_LETTERS),
            infix_letters: LetterClass::new(DEFAULT_INFIX_LETTERS),
            max_prefix_length: DEFAULT_MAX_PREFIX,
            max_suffix_length: DEFAULT_MAX_SUFFIX,
            min_stem_length: DEFAULT_MIN_STEM,
            joker: DEFAULT_JOKER,
            prefix_list: affixes.prefixes.clone(),
            suffix_list: affixes.suffixes.clone(),
            root_list: RootList::bundled_entries(),
            verb_affix_pairs: affixes.verb_pairs.clone(),
            noun_affix_pairs: affixes.noun_pairs.clone(),
        }
    }
}

impl StemmerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
