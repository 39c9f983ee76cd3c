//! Arabic letter constants and configurable letter classes.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const HAMZA: char = '\u{0621}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub const YEH_HAMZA: char = '\u{0626}';
pub const ALEF: char = '\u{0627}';
pub const BEH: char = '\u{0628}';
pub const TEH_MARBUTA: char = '\u{0629}';
pub const TEH: char = '\u{062A}';
pub const DAL: char = '\u{062F}';
pub const ZAIN: char = '\u{0632}';
pub const SEEN: char = '\u{0633}';
pub const DAD: char = '\u{0636}';
pub const TAH: char = '\u{0637}';
pub const TATWEEL: char = '\u{0640}';
pub const FEH: char = '\u{0641}';
pub const KAF: char = '\u{0643}';
pub const LAM: char = '\u{0644}';
pub const MEEM: char = '\u{0645}';
pub const NOON: char = '\u{0646}';
pub const HEH: char = '\u{0647}';
pub const WAW: char = '\u{0648}';
pub const ALEF_MAKSURA: char = '\u{0649}';
pub const YEH: char = '\u{064A}';

pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const HAMZA_ABOVE: char = '\u{0654}';
pub const HAMZA_BELOW: char = '\u{0655}';

pub const LAM_ALEF: char = '\u{FEFB}';
pub const LAM_ALEF_HAMZA_ABOVE: char = '\u{FEF7}';
pub const LAM_ALEF_HAMZA_BELOW: char = '\u{FEF9}';
pub const LAM_ALEF_MADDA_ABOVE: char = '\u{FEF5}';

/// Harakat, shadda and sukun.
pub const TASHKEEL: [char; 8] = [
    FATHATAN, DAMMATAN, KASRATAN, FATHA, DAMMA, KASRA, SUKUN, SHADDA,
];

/// Letters that may appear in a prefix.
pub const DEFAULT_PREFIX_LETTERS: &str = "ءأابتسفكلنوي";
/// Letters that may appear in a suffix.
pub const DEFAULT_SUFFIX_LETTERS: &str = "اةتكمنهويى";
/// Pattern letters that may be inserted inside a stem.
pub const DEFAULT_INFIX_LETTERS: &str = "اتويدط";

pub const DEFAULT_MAX_PREFIX: usize = 5;
pub const DEFAULT_MAX_SUFFIX: usize = 6;
pub const DEFAULT_MIN_STEM: usize = 2;
pub const DEFAULT_JOKER: char = '*';

/// Check whether a character is an Arabic diacritic mark.
pub fn is_tashkeel(c: char) -> bool {
    TASHKEEL.contains(&c)
}

/// Check whether a character is a base Arabic letter (Hamza through Yeh).
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
}

/// A set of letters allowed in a prefix, suffix or infix position.
///
/// The original ordering is preserved for display and serialization;
/// membership tests run against a sorted copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LetterClass {
    letters: String,
    sorted: Vec<char>,
}

impl LetterClass {
    /// Create a letter class from the characters of a string.
    pub fn new<S: Into<String>>(letters: S) -> Self {
        let letters = letters.into();
        let mut sorted: Vec<char> = letters.chars().collect();
        sorted.sort_unstable();
        sorted.dedup();
        LetterClass { letters, sorted }
    }

    /// Check whether the class contains a character.
    pub fn contains(&self, c: char) -> bool {
        self.sorted.binary_search(&c).is_ok()
    }

    /// The letters as originally configured.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Number of distinct letters.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }
}

impl From<String> for LetterClass {
    fn from(letters: String) -> Self {
        LetterClass::new(letters)
    }
}

impl From<&str> for LetterClass {
    fn from(letters: &str) -> Self {
        LetterClass::new(letters)
    }
}

impl From<LetterClass> for String {
    fn from(class: LetterClass) -> Self {
        class.letters
    }
}

impl fmt::Display for LetterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}
