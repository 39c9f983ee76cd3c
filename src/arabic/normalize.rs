//! Text normalization for Arabic words.
//!
//! These are pure text-to-text functions used before segmentation and during
//! root and verb normalization. None of them allocate when there is nothing
//! to change.

use std::borrow::Cow;

use crate::arabic::letters::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAKSURA, HAMZA, HAMZA_ABOVE,
    HAMZA_BELOW, HEH, LAM, LAM_ALEF, LAM_ALEF_HAMZA_ABOVE, LAM_ALEF_HAMZA_BELOW,
    LAM_ALEF_MADDA_ABOVE, TATWEEL, TEH_MARBUTA, WAW_HAMZA, YEH, YEH_HAMZA, is_tashkeel,
};

fn strip_chars(text: &str, predicate: impl Fn(char) -> bool) -> Cow<'_, str> {
    if text.chars().any(&predicate) {
        Cow::Owned(text.chars().filter(|c| !predicate(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Remove diacritics (harakat, shadda, sukun).
pub fn strip_tashkeel(text: &str) -> Cow<'_, str> {
    strip_chars(text, is_tashkeel)
}

/// Remove the elongation character (tatweel).
pub fn strip_tatweel(text: &str) -> Cow<'_, str> {
    strip_chars(text, |c| c == TATWEEL)
}

/// Rewrite Alef-Madda as Hamza followed by Alef.
pub fn expand_alef_madda(text: &str) -> Cow<'_, str> {
    if !text.contains(ALEF_MADDA) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c == ALEF_MADDA {
            out.push(HAMZA);
            out.push(ALEF);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Unify Hamza carriers.
///
/// Alef-Madda, Alef with Hamza above or below and the combining Hamza marks
/// become a bare Alef. Waw and Yeh carrying a Hamza become `ء`.
pub fn normalize_hamza(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | HAMZA_ABOVE | HAMZA_BELOW => ALEF,
            WAW_HAMZA | YEH_HAMZA => HAMZA,
            other => other,
        })
        .collect()
}

/// Decompose Lam-Alef ligatures into Lam followed by Alef.
pub fn normalize_lam_alef(text: &str) -> Cow<'_, str> {
    let is_ligature = |c: char| {
        matches!(
            c,
            LAM_ALEF | LAM_ALEF_HAMZA_ABOVE | LAM_ALEF_HAMZA_BELOW | LAM_ALEF_MADDA_ABOVE
        )
    };
    if !text.chars().any(is_ligature) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if is_ligature(c) {
            out.push(LAM);
            out.push(ALEF);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Fold common spelling variants: Teh Marbuta to Heh, Alef Maksura to Yeh.
pub fn normalize_spell_errors(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            TEH_MARBUTA => HEH,
            ALEF_MAKSURA => YEH,
            other => other,
        })
        .collect()
}

/// Aggressive normalization for search keys.
pub fn normalize_search_text(text: &str) -> String {
    let text = strip_tashkeel(text);
    let text = strip_tatweel(&text);
    let text = normalize_lam_alef(&text);
    let text = normalize_hamza(&text);
    normalize_spell_errors(&text)
}

/// Prepare a raw word for segmentation and return it as code points.
///
/// Diacritics and tatweel are removed and Alef-Madda is expanded, so every
/// offset computed later indexes this vector.
pub fn prepare_word(word: &str) -> Vec<char> {
    let word = strip_tashkeel(word);
    let word = strip_tatweel(&word);
    expand_alef_madda(&word).chars().collect()
}
