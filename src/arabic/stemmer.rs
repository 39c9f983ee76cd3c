//! The Arabic light stemmer.
//!
//! [`ArabicLightStemmer`] owns the configuration, the affix tries and the
//! collaborator tables, and runs a word through the pipeline:
//!
//! ```text
//! stopword? -> normalize -> window estimate -> segment -> validate -> stem -> root
//! ```
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::arabic::ArabicLightStemmer;
//!
//! let stemmer = ArabicLightStemmer::new();
//! assert_eq!(stemmer.light_stem("الكاتب"), "كاتب");
//! assert_eq!(stemmer.light_stem("يكتبون"), "كتب");
//! assert_eq!(stemmer.choose_root("يكتبون"), "كتب");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::arabic::config::{StemmerConfig, clamp_joker};
use crate::arabic::dictionary::{RootDictionary, RootList};
use crate::arabic::letters::LetterClass;
use crate::arabic::normalize::prepare_word;
use crate::arabic::root::RootExtractor;
use crate::arabic::segment::{Segment, SegmentSet, Segmenter};
use crate::arabic::stamp::{VerbStampList, VerbStampRegistry};
use crate::arabic::star::{StarTransform, StarWindow};
use crate::arabic::stopwords::{StopwordDictionary, StopwordTable};
use crate::arabic::trie::AffixTrie;
use crate::arabic::validate::{AffixPairTable, AffixValidator, WordClass};

/// One segmentation of a word with its derived stem and root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub left: usize,
    pub right: usize,
    pub prefix: String,
    pub stem: String,
    pub suffix: String,
    pub starstem: String,
    pub root: String,
}

/// Full trace of a stemming call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The word as given.
    pub word: String,
    /// The word after diacritic stripping and Alef-Madda expansion.
    pub normalized: String,
    pub stopword: bool,
    pub window: StarWindow,
    pub segments: Vec<Segment>,
    pub accepted: Vec<Segment>,
    pub chosen: Option<Segment>,
    pub class: Option<WordClass>,
    pub prefix: String,
    pub stem: String,
    pub suffix: String,
    pub starstem: String,
    pub root: String,
}

/// A configurable Arabic light stemmer and root extractor.
///
/// Stemming calls take `&self` and never fail. Configuration setters take
/// `&mut self` and rebuild the structures derived from the changed field.
#[derive(Debug, Clone)]
pub struct ArabicLightStemmer {
    config: StemmerConfig,
    prefix_trie: AffixTrie,
    suffix_trie: AffixTrie,
    verb_pairs: AffixPairTable,
    noun_pairs: AffixPairTable,
    roots: Arc<dyn RootDictionary>,
    verbs: Arc<dyn VerbStampRegistry>,
    stopwords: Arc<dyn StopwordTable>,
}

impl Default for ArabicLightStemmer {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

impl ArabicLightStemmer {
    /// Create a stemmer with the bundled tables.
    pub fn new() -> Self {
        Self::with_config(StemmerConfig::default())
    }

    /// Create a stemmer with a custom configuration and the bundled
    /// stopword and verb tables.
    pub fn with_config(config: StemmerConfig) -> Self {
        ArabicLightStemmer {
            prefix_trie: AffixTrie::prefixes(&config.prefix_list),
            suffix_trie: AffixTrie::suffixes(&config.suffix_list),
            verb_pairs: AffixPairTable::new(config.verb_affix_pairs.iter().cloned()),
            noun_pairs: AffixPairTable::new(config.noun_affix_pairs.iter().cloned()),
            roots: Arc::new(RootList::new(&config.root_list)),
            verbs: Arc::new(VerbStampList::bundled()),
            stopwords: Arc::new(StopwordDictionary::bundled()),
            config,
        }
    }

    /// Replace the stopword table.
    pub fn with_stopwords(mut self, stopwords: Arc<dyn StopwordTable>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the verb-stamp registry.
    pub fn with_verb_stamps(mut self, verbs: Arc<dyn VerbStampRegistry>) -> Self {
        self.verbs = verbs;
        self
    }

    /// Replace the root dictionary.
    pub fn with_root_dictionary(mut self, roots: Arc<dyn RootDictionary>) -> Self {
        self.roots = roots;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Replace the whole configuration and rebuild every derived table.
    pub fn set_config(&mut self, config: StemmerConfig) {
        let stopwords = Arc::clone(&self.stopwords);
        let verbs = Arc::clone(&self.verbs);
        *self = Self::with_config(config)
            .with_stopwords(stopwords)
            .with_verb_stamps(verbs);
    }

    /// Replace the stopword table in place.
    pub fn set_stopwords(&mut self, stopwords: Arc<dyn StopwordTable>) {
        self.stopwords = stopwords;
    }

    /// Replace the verb-stamp registry in place.
    pub fn set_verb_stamps(&mut self, verbs: Arc<dyn VerbStampRegistry>) {
        self.verbs = verbs;
    }

    /// Replace the root dictionary in place.
    ///
    /// The configured root list is left as is; [`set_root_list`](Self::set_root_list)
    /// or [`set_config`](Self::set_config) will rebuild the dictionary from it.
    pub fn set_root_dictionary(&mut self, roots: Arc<dyn RootDictionary>) {
        self.roots = roots;
    }

    /// Letters that may appear in a prefix.
    pub fn prefix_letters(&self) -> &LetterClass {
        &self.config.prefix_letters
    }

    /// Set the prefix letters used by the window estimate.
    pub fn set_prefix_letters<L: Into<LetterClass>>(&mut self, letters: L) {
        self.config.prefix_letters = letters.into();
    }

    /// Letters that may appear in a suffix.
    pub fn suffix_letters(&self) -> &LetterClass {
        &self.config.suffix_letters
    }

    /// Set the suffix letters used by the window estimate.
    pub fn set_suffix_letters<L: Into<LetterClass>>(&mut self, letters: L) {
        self.config.suffix_letters = letters.into();
    }

    /// Pattern letters kept visible in starred stems.
    pub fn infix_letters(&self) -> &LetterClass {
        &self.config.infix_letters
    }

    /// Set the infix letters.
    ///
    /// An empty class masks every letter of a stem.
    pub fn set_infix_letters<L: Into<LetterClass>>(&mut self, letters: L) {
        self.config.infix_letters = letters.into();
    }

    /// Marker for radical positions in starred patterns.
    pub fn joker(&self) -> char {
        self.config.joker
    }

    /// Set the joker to the first character of `joker`.
    ///
    /// An empty string leaves the joker unchanged.
    pub fn set_joker(&mut self, joker: &str) {
        match clamp_joker(joker) {
            Some(c) => self.config.joker = c,
            None => log::warn!("ignoring empty joker, keeping {:?}", self.config.joker),
        }
    }

    /// Longest prefix the window estimate considers.
    pub fn max_prefix_length(&self) -> usize {
        self.config.max_prefix_length
    }

    /// Set the longest prefix the window estimate considers.
    pub fn set_max_prefix_length(&mut self, length: usize) {
        self.config.max_prefix_length = length;
    }

    /// Longest suffix the window estimate considers.
    pub fn max_suffix_length(&self) -> usize {
        self.config.max_suffix_length
    }

    /// Set the longest suffix the window estimate considers.
    pub fn set_max_suffix_length(&mut self, length: usize) {
        self.config.max_suffix_length = length;
    }

    /// Shortest stem a segment may leave.
    pub fn min_stem_length(&self) -> usize {
        self.config.min_stem_length
    }

    /// Set the shortest stem a segment may leave. Values below 2 act as 2.
    pub fn set_min_stem_length(&mut self, length: usize) {
        self.config.min_stem_length = length;
    }

    /// Known prefixes, including the empty one.
    pub fn prefix_list(&self) -> &[String] {
        &self.config.prefix_list
    }

    /// Replace the prefix list and rebuild the prefix trie.
    pub fn set_prefix_list(&mut self, prefixes: Vec<String>) {
        self.prefix_trie = self.prefix_trie.rebuild(&prefixes);
        self.config.prefix_list = prefixes;
    }

    /// Known suffixes, including the empty one.
    pub fn suffix_list(&self) -> &[String] {
        &self.config.suffix_list
    }

    /// Replace the suffix list and rebuild the suffix trie.
    pub fn set_suffix_list(&mut self, suffixes: Vec<String>) {
        self.suffix_trie = self.suffix_trie.rebuild(&suffixes);
        self.config.suffix_list = suffixes;
    }

    /// The configured roots, as given.
    pub fn root_list(&self) -> &[String] {
        &self.config.root_list
    }

    /// Replace the root list and the dictionary built from it.
    pub fn set_root_list(&mut self, roots: Vec<String>) {
        self.roots = Arc::new(RootList::new(&roots));
        self.config.root_list = roots;
    }

    /// Valid `prefix-suffix` pairs for verbs.
    pub fn verb_affix_pairs(&self) -> &[String] {
        &self.config.verb_affix_pairs
    }

    /// Replace the verb pair table.
    pub fn set_verb_affix_pairs(&mut self, pairs: Vec<String>) {
        self.verb_pairs = AffixPairTable::new(pairs.iter().cloned());
        self.config.verb_affix_pairs = pairs;
    }

    /// Valid `prefix-suffix` pairs for nouns.
    pub fn noun_affix_pairs(&self) -> &[String] {
        &self.config.noun_affix_pairs
    }

    /// Replace the noun pair table.
    pub fn set_noun_affix_pairs(&mut self, pairs: Vec<String>) {
        self.noun_pairs = AffixPairTable::new(pairs.iter().cloned());
        self.config.noun_affix_pairs = pairs;
    }

    fn star(&self) -> StarTransform<'_> {
        StarTransform::new(&self.config, &self.prefix_trie, &self.suffix_trie)
    }

    fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(
            &self.prefix_trie,
            &self.suffix_trie,
            self.config.min_stem_length,
        )
    }

    fn validator(&self) -> AffixValidator<'_> {
        AffixValidator::new(
            &self.verb_pairs,
            &self.noun_pairs,
            self.verbs.as_ref(),
            self.stopwords.as_ref(),
        )
    }

    fn extractor(&self) -> RootExtractor<'_> {
        RootExtractor::new(
            self.config.joker,
            self.roots.as_ref(),
            self.stopwords.as_ref(),
        )
    }

    /// Stem a word.
    pub fn light_stem(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        if let Some(stem) = self.stopwords.stem_of(word) {
            log::debug!("{word}: stopword, stem {stem}");
            return stem;
        }

        let chars = prepare_word(word);
        let segments = self.segmenter().segment(&chars);
        let stem = match self.validator().choose_segment(&chars, &segments) {
            Some(segment) => collect(segment.stem(&chars)),
            None => collect(&chars),
        };
        log::debug!("{word}: {} segments, stem {stem}", segments.len());
        stem
    }

    /// All admissible segments of a word, before validation.
    pub fn segment(&self, word: &str) -> SegmentSet {
        self.segmenter().segment(&prepare_word(word))
    }

    /// The starred pattern of a stem.
    pub fn star_stem(&self, stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        self.star().star_stem(&chars)
    }

    /// Extract the root of a stem.
    pub fn extract_root(&self, stem: &str) -> String {
        self.extractor().extract_root(stem, &self.star_stem(stem))
    }

    fn candidate(&self, word: &[char], segment: Segment) -> Candidate {
        let stem_chars = segment.stem(word);
        let stem = collect(stem_chars);
        let starstem = self.star().star_stem(stem_chars);
        let root = self.extractor().extract_root(&stem, &starstem);
        Candidate {
            left: segment.left,
            right: segment.right,
            prefix: collect(segment.prefix(word)),
            stem,
            suffix: collect(segment.suffix(word)),
            starstem,
            root,
        }
    }

    fn candidates(&self, word: &[char], segments: &SegmentSet) -> Vec<Candidate> {
        segments
            .iter()
            .map(|segment| self.candidate(word, segment))
            .collect()
    }

    /// Every segmentation of a word with its stem, pattern and root.
    pub fn affix_list(&self, word: &str) -> Vec<Candidate> {
        let chars = prepare_word(word);
        let segments = self.segmenter().segment(&chars);
        self.candidates(&chars, &segments)
    }

    /// Choose the root of a word across all of its segmentations.
    pub fn choose_root(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        let roots: Vec<String> = self
            .affix_list(word)
            .into_iter()
            .map(|candidate| candidate.root)
            .collect();
        let root = self.extractor().choose_root(word, &roots);
        log::debug!("{word}: {} root candidates, root {root}", roots.len());
        root
    }

    /// Run the full pipeline and report every intermediate result.
    pub fn analyze(&self, word: &str) -> Analysis {
        let chars = prepare_word(word);
        let normalized = collect(&chars);
        let window = self.star().estimate_window(&chars);

        if let Some(stem) = self.stopwords.stem_of(word) {
            let root = self.stopwords.root_of(word).unwrap_or_else(|| stem.clone());
            return Analysis {
                word: word.to_string(),
                normalized,
                stopword: true,
                window,
                segments: Vec::new(),
                accepted: Vec::new(),
                chosen: None,
                class: None,
                prefix: String::new(),
                stem,
                suffix: String::new(),
                starstem: String::new(),
                root,
            };
        }

        let validator = self.validator();
        let segments = self.segmenter().segment(&chars);
        let accepted = validator.accepted(&chars, &segments);
        let chosen = accepted.best();
        let class = chosen.and_then(|segment| validator.classify(&chars, segment));
        let (prefix, stem_chars, suffix) = match chosen {
            Some(segment) => (
                collect(segment.prefix(&chars)),
                segment.stem(&chars),
                collect(segment.suffix(&chars)),
            ),
            None => (String::new(), chars.as_slice(), String::new()),
        };

        let roots: Vec<String> = self
            .candidates(&chars, &segments)
            .into_iter()
            .map(|candidate| candidate.root)
            .collect();

        Analysis {
            word: word.to_string(),
            normalized,
            stopword: false,
            window,
            segments: segments.iter().collect(),
            accepted: accepted.iter().collect(),
            chosen,
            class,
            prefix,
            stem: collect(stem_chars),
            suffix,
            starstem: self.star().star_stem(stem_chars),
            root: if word.is_empty() {
                String::new()
            } else {
                self.extractor().choose_root(word, &roots)
            },
        }
    }

    /// Stem a batch of words in parallel.
    pub fn stem_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.light_stem(word.as_ref()))
            .collect()
    }

    /// Choose the roots of a batch of words in parallel.
    pub fn root_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.choose_root(word.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arabic::affixes::DEFAULT_AFFIXES;

    #[test]
    fn test_light_stem_scenarios() {
        let stemmer = ArabicLightStemmer::new();

        assert_eq!(stemmer.light_stem("الكاتب"), "كاتب");
        assert_eq!(stemmer.light_stem("يكتبون"), "كتب");
        assert_eq!(stemmer.light_stem(""), "");
    }

    #[test]
    fn test_light_stem_is_deterministic() {
        let stemmer = ArabicLightStemmer::new();
        for word in ["المدرسة", "سيكتبون", "فكتبوها", "كتاب"] {
            assert_eq!(stemmer.light_stem(word), stemmer.light_stem(word));
        }
    }

    #[test]
    fn test_stopwords_bypass_segmentation() {
        let stemmer = ArabicLightStemmer::new();

        assert_eq!(stemmer.light_stem("وفي"), "في");
        assert_eq!(stemmer.choose_root("كانت"), "كون");

        let analysis = stemmer.analyze("عليه");
        assert!(analysis.stopword);
        assert!(analysis.segments.is_empty());
        assert_eq!(analysis.stem, "على");
    }

    #[test]
    fn test_diacritics_are_ignored() {
        let stemmer = ArabicLightStemmer::new();
        assert_eq!(stemmer.light_stem("يَكْتُبُونَ"), "كتب");
    }

    #[test]
    fn test_no_valid_segment_returns_whole_word() {
        let config = StemmerConfig {
            verb_affix_pairs: Vec::new(),
            noun_affix_pairs: Vec::new(),
            ..StemmerConfig::default()
        };
        let stemmer = ArabicLightStemmer::with_config(config);

        assert_eq!(stemmer.light_stem("الكاتب"), "الكاتب");
        assert_eq!(stemmer.light_stem("آكل"), "ءاكل");
    }

    #[test]
    fn test_choose_root() {
        let stemmer = ArabicLightStemmer::new();

        assert_eq!(stemmer.choose_root("يكتبون"), "كتب");
        assert_eq!(stemmer.choose_root(""), "");
        let root = stemmer.choose_root("الكاتب");
        assert!((2..=4).contains(&root.chars().count()));
    }

    #[test]
    fn test_extract_root() {
        let stemmer = ArabicLightStemmer::new();

        assert_eq!(stemmer.extract_root("كتب"), "كتب");
        assert_eq!(stemmer.extract_root("كاتب"), "كتب");
        assert_eq!(stemmer.extract_root("مكتوب"), "مكتب");
    }

    #[test]
    fn test_affix_list() {
        let stemmer = ArabicLightStemmer::new();
        let candidates = stemmer.affix_list("يكتبون");

        assert_eq!(candidates.len(), 6);
        let best = candidates
            .iter()
            .find(|c| c.left == 1 && c.right == 4)
            .unwrap();
        assert_eq!(best.prefix, "ي");
        assert_eq!(best.stem, "كتب");
        assert_eq!(best.suffix, "ون");
        assert_eq!(best.root, "كتب");
    }

    #[test]
    fn test_analyze() {
        let stemmer = ArabicLightStemmer::new();
        let analysis = stemmer.analyze("يكتبون");

        assert!(!analysis.stopword);
        assert_eq!(analysis.chosen, Some(Segment::new(1, 4)));
        assert_eq!(analysis.class, Some(WordClass::Verb));
        assert_eq!(analysis.prefix, "ي");
        assert_eq!(analysis.stem, "كتب");
        assert_eq!(analysis.suffix, "ون");
        assert_eq!(analysis.root, "كتب");
        assert!(analysis.accepted.iter().all(|s| s.right >= s.left + 2));

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["class"], "verb");
    }

    #[test]
    fn test_set_prefix_list_rebuilds_trie() {
        let mut stemmer = ArabicLightStemmer::new();
        assert_eq!(stemmer.light_stem("الكاتب"), "كاتب");

        stemmer.set_prefix_list(vec![String::new()]);
        assert_eq!(stemmer.prefix_list(), &[String::new()]);
        assert_eq!(stemmer.light_stem("الكاتب"), "الكاتب");

        stemmer.set_prefix_list(DEFAULT_AFFIXES.prefixes.clone());
        assert_eq!(stemmer.light_stem("الكاتب"), "كاتب");
    }

    #[test]
    fn test_set_root_list() {
        let mut stemmer = ArabicLightStemmer::new();
        stemmer.set_root_list(vec!["كتبن".to_string()]);

        // Dictionary membership is applied before the three-letter preference.
        assert_eq!(stemmer.choose_root("يكتبون"), "كتبن");
        assert_eq!(stemmer.root_list(), &["كتبن".to_string()]);
    }

    #[test]
    fn test_set_joker() {
        let mut stemmer = ArabicLightStemmer::new();

        stemmer.set_joker("#$");
        assert_eq!(stemmer.joker(), '#');
        assert_eq!(stemmer.star_stem("كاتب"), "#ا##");

        stemmer.set_joker("");
        assert_eq!(stemmer.joker(), '#');
    }

    #[test]
    fn test_setters() {
        let mut stemmer = ArabicLightStemmer::new();

        stemmer.set_max_prefix_length(3);
        stemmer.set_max_suffix_length(4);
        stemmer.set_min_stem_length(3);
        stemmer.set_infix_letters("اوي");
        assert_eq!(stemmer.max_prefix_length(), 3);
        assert_eq!(stemmer.max_suffix_length(), 4);
        assert_eq!(stemmer.min_stem_length(), 3);
        assert_eq!(stemmer.infix_letters().as_str(), "اوي");

        stemmer.set_verb_affix_pairs(vec!["ي-ون".to_string()]);
        stemmer.set_noun_affix_pairs(Vec::new());
        assert_eq!(stemmer.light_stem("يكتبون"), "كتب");
        assert_eq!(stemmer.light_stem("الكاتب"), "الكاتب");
    }

    #[test]
    fn test_stem_all_matches_sequential() {
        let stemmer = ArabicLightStemmer::new();
        let words = ["الكاتب", "يكتبون", "وفي", "", "المكتبات"];

        let parallel = stemmer.stem_all(&words);
        let sequential: Vec<String> = words.iter().map(|w| stemmer.light_stem(w)).collect();
        assert_eq!(parallel, sequential);

        let roots = stemmer.root_all(&words[..2]);
        assert_eq!(roots[1], "كتب");
    }

    #[test]
    fn test_set_config_keeps_collaborators() {
        let stopwords = StopwordDictionary::from_json(r#"{"كتاب": {"stem": "كتب"}}"#).unwrap();
        let mut stemmer = ArabicLightStemmer::new().with_stopwords(Arc::new(stopwords));

        stemmer.set_config(StemmerConfig::default());
        assert_eq!(stemmer.light_stem("كتاب"), "كتب");
    }

    #[test]
    fn test_stemmer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArabicLightStemmer>();
    }
}
