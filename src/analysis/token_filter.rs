//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! modify, mark or remove tokens.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes Arabic stopwords
//! - [`stem::StemFilter`] - Reduces words to their stem or root
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::token_filter::Filter;
//! use arabic_stemmer::analysis::token_filter::stem::StemFilter;
//! use arabic_stemmer::analysis::token::Token;
//!
//! let filter = StemFilter::new();
//! let tokens = vec![Token::new("الكاتب", 0), Token::new("يكتبون", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "كاتب");
//! assert_eq!(filtered[1].text, "كتب");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Stemmer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// ```
/// use arabic_stemmer::analysis::token::{Token, TokenStream};
/// use arabic_stemmer::analysis::token_filter::Filter;
/// use arabic_stemmer::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;
