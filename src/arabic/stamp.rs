//! Verb stamps.
//!
//! A verb stamp is the consonantal skeleton of a verb: weak letters are
//! removed and Hamza carriers are unified, so that every conjugated form of
//! a verb reduces to the same key.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::arabic::dictionary::parse_word_list;
use crate::arabic::letters::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAKSURA, HAMZA, WAW, WAW_HAMZA,
    YEH, YEH_HAMZA,
};
use crate::arabic::normalize::strip_tashkeel;
use crate::error::Result;

const BUNDLED_VERBS: &str = include_str!("../../resources/verbs.txt");

/// Lookup of known verbs by normalized stamp.
pub trait VerbStampRegistry: Send + Sync + std::fmt::Debug {
    /// `stamp` must already be normalized with [`normalize_verb`].
    fn is_known_verb_stem(&self, stamp: &str) -> bool;
}

/// Reduce a verb to its stamp.
pub fn normalize_verb(word: &str) -> String {
    let word = strip_tashkeel(word);
    let mut chars: Vec<char> = word.chars().collect();

    if chars.len() == 4 && chars[0] == ALEF_HAMZA_ABOVE {
        chars.remove(0);
    }

    let mut stamp: Vec<char> = chars
        .into_iter()
        .map(|c| match c {
            ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | WAW_HAMZA | YEH_HAMZA | ALEF_MADDA => HAMZA,
            other => other,
        })
        .filter(|c| !matches!(*c, ALEF | WAW | YEH | ALEF_MAKSURA))
        .collect();

    let n = stamp.len();
    if n >= 2 && stamp[n - 1] == stamp[n - 2] {
        stamp.pop();
    }

    stamp.into_iter().collect()
}

/// A set of verb stamps built from a list of verbs.
#[derive(Debug, Clone, Default)]
pub struct VerbStampList {
    stamps: AHashSet<String>,
}

impl VerbStampList {
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stamps = verbs
            .into_iter()
            .map(|verb| normalize_verb(verb.as_ref().trim()))
            .filter(|stamp| !stamp.is_empty())
            .collect();
        VerbStampList { stamps }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(parse_word_list(text))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(Self::from_text(&content))
    }

    /// The verb list shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_VERBS)
    }

    /// Number of distinct stamps.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

impl VerbStampRegistry for VerbStampList {
    fn is_known_verb_stem(&self, stamp: &str) -> bool {
        self.stamps.contains(stamp)
    }
}
