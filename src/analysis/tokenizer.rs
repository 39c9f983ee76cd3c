//! Tokenizers for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline after the char
//! filters: they split the input text into tokens with byte offsets.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::tokenizer::Tokenizer;
//! use arabic_stemmer::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::arabic().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("ذهب الولد، إلى المدرسة").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by
/// analyzers running on several threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
