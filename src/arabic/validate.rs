//! Segment validation.
//!
//! A segment is kept when its prefix/suffix pair is listed for a word class
//! and its stem passes that class's rules. Verbs are checked first.

use std::fmt;

use ahash::AHashSet;
use serde::Serialize;

use crate::arabic::affixes::pair_key;
use crate::arabic::letters::{ALEF, ALEF_HAMZA_ABOVE, NOON, TEH, TEH_MARBUTA, YEH};
use crate::arabic::segment::{Segment, SegmentSet};
use crate::arabic::stamp::{VerbStampRegistry, normalize_verb};
use crate::arabic::stopwords::StopwordTable;

/// Word class a segment was accepted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Verb,
    Noun,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordClass::Verb => f.write_str("verb"),
            WordClass::Noun => f.write_str("noun"),
        }
    }
}

/// A set of `prefix-suffix` keys.
#[derive(Debug, Clone, Default)]
pub struct AffixPairTable {
    pairs: AHashSet<String>,
}

impl AffixPairTable {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AffixPairTable {
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, prefix: &str, suffix: &str) -> bool {
        self.pairs.contains(&pair_key(prefix, suffix))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn is_valid_verb_stem(stem: &[char], prefix: &[char], verbs: &dyn VerbStampRegistry) -> bool {
    let len = stem.len();
    if !(2..=6).contains(&len) || stem.contains(&TEH_MARBUTA) {
        return false;
    }

    let first = stem[0];
    let prefix_last = prefix.last().copied();

    if len == 6 && first != ALEF {
        return false;
    }
    if len == 5
        && first != ALEF
        && first != TEH
        && matches!(prefix_last, Some(YEH | TEH | NOON | ALEF_HAMZA_ABOVE))
    {
        return false;
    }
    if first == ALEF && matches!(prefix_last, Some(YEH | NOON | TEH | ALEF_HAMZA_ABOVE | ALEF)) {
        return false;
    }

    let stem: String = stem.iter().collect();
    verbs.is_known_verb_stem(&normalize_verb(&stem))
}

fn is_valid_noun_stem(stem: &[char]) -> bool {
    !stem.is_empty() && stem.len() < 8
}

/// Checks segments against the affix-pair tables and word-class rules.
#[derive(Clone, Copy)]
pub struct AffixValidator<'a> {
    verb_pairs: &'a AffixPairTable,
    noun_pairs: &'a AffixPairTable,
    verbs: &'a dyn VerbStampRegistry,
    stopwords: &'a dyn StopwordTable,
}

impl<'a> AffixValidator<'a> {
    pub fn new(
        verb_pairs: &'a AffixPairTable,
        noun_pairs: &'a AffixPairTable,
        verbs: &'a dyn VerbStampRegistry,
        stopwords: &'a dyn StopwordTable,
    ) -> Self {
        AffixValidator {
            verb_pairs,
            noun_pairs,
            verbs,
            stopwords,
        }
    }

    /// Check a stem against the rules of one word class.
    pub fn valid_stem(&self, stem: &str, class: WordClass, prefix: &str) -> bool {
        let stem: Vec<char> = stem.chars().collect();
        match class {
            WordClass::Verb => {
                let prefix: Vec<char> = prefix.chars().collect();
                is_valid_verb_stem(&stem, &prefix, self.verbs)
            }
            WordClass::Noun => is_valid_noun_stem(&stem),
        }
    }

    /// The class a segment is accepted under, if any.
    pub fn classify(&self, word: &[char], segment: Segment) -> Option<WordClass> {
        let prefix_chars = segment.prefix(word);
        let stem = segment.stem(word);
        let prefix: String = prefix_chars.iter().collect();
        let suffix: String = segment.suffix(word).iter().collect();

        if self.verb_pairs.contains(&prefix, &suffix)
            && is_valid_verb_stem(stem, prefix_chars, self.verbs)
        {
            return Some(WordClass::Verb);
        }
        if self.noun_pairs.contains(&prefix, &suffix) && is_valid_noun_stem(stem) {
            return Some(WordClass::Noun);
        }
        None
    }

    /// Check whether a prefix/suffix pair is valid around a stem.
    pub fn verify_affix(&self, prefix: &str, suffix: &str, stem: &str) -> bool {
        let word: Vec<char> = prefix.chars().chain(stem.chars()).chain(suffix.chars()).collect();
        let left = prefix.chars().count();
        let right = left + stem.chars().count();
        self.classify(&word, Segment::new(left, right)).is_some()
    }

    /// Segments that pass validation.
    pub fn accepted(&self, word: &[char], segments: &SegmentSet) -> SegmentSet {
        segments.filter(|segment| {
            let verdict = self.classify(word, segment);
            log::trace!(
                "segment ({}, {}) -> {}",
                segment.left,
                segment.right,
                verdict.map_or("rejected".to_string(), |class| class.to_string())
            );
            verdict.is_some()
        })
    }

    /// The boundary to cut the stem at, or `None` when no segment passes.
    pub fn choose_segment(&self, word: &[char], segments: &SegmentSet) -> Option<Segment> {
        self.accepted(word, segments).best()
    }

    /// Choose the stem of a word.
    ///
    /// `raw` is the word as given, used for the stopword lookup; `word` is its
    /// normalized form. Falls back to the whole word.
    pub fn choose_stem(&self, raw: &str, word: &[char], segments: &SegmentSet) -> String {
        if let Some(stem) = self.stopwords.stem_of(raw) {
            return stem;
        }
        match self.choose_segment(word, segments) {
            Some(segment) => segment.stem(word).iter().collect(),
            None => word.iter().collect(),
        }
    }
}

impl fmt::Debug for AffixValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffixValidator")
            .field("verb_pairs", &self.verb_pairs.len())
            .field("noun_pairs", &self.noun_pairs.len())
            .finish()
    }
}
