//! Stop filter implementation.
//!
//! Removes Arabic function words (particles, prepositions, pronouns) that
//! carry no content. The default list is the bundled stopword dictionary.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::token_filter::Filter;
//! use arabic_stemmer::analysis::token_filter::stop::StopFilter;
//! use arabic_stemmer::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("ذهب", 0),
//!     Token::new("إلى", 1),
//!     Token::new("المدرسة", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "ذهب");
//! assert_eq!(result[1].text, "المدرسة");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::arabic::stopwords::StopwordDictionary;
use crate::error::Result;

/// Default Arabic stopwords, taken from the bundled dictionary.
pub static DEFAULT_ARABIC_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    StopwordDictionary::bundled()
        .words()
        .map(str::to_string)
        .collect()
});

/// A filter that removes stopwords from the token stream.
///
/// Stopped tokens can either be removed or kept and marked as stopped. In
/// both cases the stem filter leaves them untouched.
///
/// ```
/// use arabic_stemmer::analysis::token_filter::Filter;
/// use arabic_stemmer::analysis::token_filter::stop::StopFilter;
/// use arabic_stemmer::analysis::token::Token;
///
/// let filter = StopFilter::from_words(vec!["في"]).remove_stopped(false);
/// let tokens = vec![Token::new("في", 0), Token::new("البيت", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords to remove
    stop_words: Arc<AHashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default Arabic stopwords.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ARABIC_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stopwords.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a stop filter from the keys of a stopword dictionary.
    pub fn from_dictionary(dictionary: &StopwordDictionary) -> Self {
        Self::from_words(dictionary.words())
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
