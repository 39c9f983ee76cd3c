//! Known-root dictionaries.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::arabic::root::normalize_root;
use crate::error::Result;

pub(crate) const BUNDLED_ROOTS: &str = include_str!("../../resources/roots.txt");

/// Membership test over normalized roots.
pub trait RootDictionary: Send + Sync + std::fmt::Debug {
    fn contains(&self, root: &str) -> bool;
}

/// Split a newline-separated word list, skipping blank lines and `#` comments.
pub(crate) fn parse_word_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// A set of roots, normalized with [`normalize_root`] at load time.
#[derive(Debug, Clone, Default)]
pub struct RootList {
    roots: BTreeSet<String>,
}

impl RootList {
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots = roots
            .into_iter()
            .map(|root| normalize_root(root.as_ref().trim()))
            .filter(|root| !root.is_empty())
            .collect();
        RootList { roots }
    }

    /// Parse a newline-separated list.
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_word_list(text))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(Self::from_text(&content))
    }

    /// The root list shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_ROOTS)
    }

    /// The raw bundled entries, before normalization.
    pub fn bundled_entries() -> Vec<String> {
        parse_word_list(BUNDLED_ROOTS).map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }
}

impl RootDictionary for RootList {
    fn contains(&self, root: &str) -> bool {
        self.roots.contains(root)
    }
}
