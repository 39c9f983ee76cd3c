//! Arabic orthographic normalization as a char filter.

use super::{CharFilter, Transformation};
use crate::arabic::letters::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, HAMZA, HAMZA_ABOVE, HAMZA_BELOW, LAM,
    LAM_ALEF, LAM_ALEF_HAMZA_ABOVE, LAM_ALEF_HAMZA_BELOW, LAM_ALEF_MADDA_ABOVE, TATWEEL,
    WAW_HAMZA, YEH_HAMZA, is_tashkeel,
};

/// Strips diacritics and tatweel, and optionally decomposes Lam-Alef
/// ligatures and unifies Hamza forms.
///
/// Hamza unification is off by default because the stemmer expands
/// Alef-Madda itself and its tables are written with Hamza carriers.
#[derive(Clone, Debug)]
pub struct ArabicNormalizationCharFilter {
    strip_tashkeel: bool,
    strip_tatweel: bool,
    lam_alef: bool,
    hamza: bool,
}

impl ArabicNormalizationCharFilter {
    pub fn new() -> Self {
        ArabicNormalizationCharFilter {
            strip_tashkeel: true,
            strip_tatweel: true,
            lam_alef: true,
            hamza: false,
        }
    }

    pub fn strip_tashkeel(mut self, enabled: bool) -> Self {
        self.strip_tashkeel = enabled;
        self
    }

    pub fn strip_tatweel(mut self, enabled: bool) -> Self {
        self.strip_tatweel = enabled;
        self
    }

    /// Decompose Lam-Alef ligatures into Lam followed by Alef.
    pub fn lam_alef(mut self, enabled: bool) -> Self {
        self.lam_alef = enabled;
        self
    }

    /// Unify Hamza carriers to a bare Hamza.
    pub fn hamza(mut self, enabled: bool) -> Self {
        self.hamza = enabled;
        self
    }

    fn replacement(&self, c: char) -> Option<&'static [char]> {
        match c {
            c if self.strip_tashkeel && is_tashkeel(c) => Some(&[]),
            TATWEEL if self.strip_tatweel => Some(&[]),
            LAM_ALEF | LAM_ALEF_HAMZA_ABOVE | LAM_ALEF_HAMZA_BELOW | LAM_ALEF_MADDA_ABOVE
                if self.lam_alef =>
            {
                Some(&[LAM, ALEF])
            }
            ALEF_MADDA if self.hamza => Some(&[HAMZA, ALEF]),
            ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | WAW_HAMZA | YEH_HAMZA | HAMZA_ABOVE
            | HAMZA_BELOW
                if self.hamza =>
            {
                Some(&[HAMZA])
            }
            _ => None,
        }
    }
}

impl Default for ArabicNormalizationCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for ArabicNormalizationCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        for (start, c) in input.char_indices() {
            match self.replacement(c) {
                Some(replacement) => {
                    let new_start = output.len();
                    output.extend(replacement);
                    transformations.push(Transformation::new(
                        start,
                        start + c.len_utf8(),
                        new_start,
                        output.len(),
                    ));
                }
                None => output.push(c),
            }
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "arabic_normalize"
    }
}
