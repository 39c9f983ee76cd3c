//! Char filters that normalize raw text before tokenization.
//!
//! A char filter returns the rewritten text together with the list of
//! [`Transformation`]s it applied, so that token offsets computed on the
//! filtered text can be mapped back onto the original.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::char_filter::CharFilter;
//! use arabic_stemmer::analysis::char_filter::arabic_normalize::ArabicNormalizationCharFilter;
//!
//! let filter = ArabicNormalizationCharFilter::new();
//! let (text, transformations) = filter.filter("كَتَبَ");
//! assert_eq!(text, "كتب");
//! assert_eq!(transformations.len(), 3);
//! ```

/// A change in the text, mapping a byte range in the original text to a
/// byte range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the transformations, ordered by
    /// position.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod arabic_normalize;
