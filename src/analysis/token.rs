//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer produces them, filters rewrite or drop them.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("الكاتب", 0, 0, 12)
//!     .with_token_type(TokenType::Arabic)
//!     .with_original_text("الكاتب");
//!
//! assert_eq!(token.text, "الكاتب");
//! assert_eq!(token.end_offset, 12);
//! assert_eq!(
//!     token.metadata.as_ref().unwrap().token_type,
//!     Some(TokenType::Arabic)
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arabic::letters::is_arabic_letter;

/// A word produced by a tokenizer, with byte offsets into the raw text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Index of the token in the stream.
    pub position: usize,

    /// Byte range of the token in the raw text, before any char filter.
    pub start_offset: usize,
    pub end_offset: usize,

    /// Set by the stop filter when it marks instead of removing.
    pub stopped: bool,

    pub metadata: Option<TokenMetadata>,
}

/// Script class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Arabic,
    /// Non-Arabic letters
    Alphanum,
    Num,
    Other,
}

impl TokenType {
    /// Classify a token by its first char.
    pub fn detect(text: &str) -> Self {
        let Some(c) = text.chars().next() else {
            return TokenType::Other;
        };
        if is_arabic_letter(c) {
            TokenType::Arabic
        } else if c.is_numeric() {
            TokenType::Num
        } else if c.is_alphanumeric() {
            TokenType::Alphanum
        } else {
            TokenType::Other
        }
    }
}

/// What filters record about a token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Surface form before stemming.
    pub original_text: Option<String>,
    pub token_type: Option<TokenType>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            metadata: None,
        }
    }

    /// Byte length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn metadata_mut(&mut self) -> &mut TokenMetadata {
        self.metadata.get_or_insert_with(TokenMetadata::default)
    }

    /// Record the surface form the token had before a filter rewrote it.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        self.metadata_mut().original_text = Some(original.into());
        self
    }

    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.metadata_mut().token_type = Some(token_type);
        self
    }

    /// Replace the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens flowing between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("كتاب", 0);
        assert_eq!(token.text, "كتاب");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.stopped);
        assert!(token.metadata.is_none());
        assert_eq!(token.len(), 8);
    }

    #[test]
    fn test_token_builders() {
        let token = Token::with_offsets("كتب", 2, 10, 16)
            .with_original_text("يكتبون")
            .with_token_type(TokenType::Arabic)
            .stop();

        assert!(token.is_stopped());
        assert_eq!(token.position, 2);
        let metadata = token.metadata.as_ref().unwrap();
        assert_eq!(metadata.original_text.as_deref(), Some("يكتبون"));
        assert_eq!(metadata.token_type, Some(TokenType::Arabic));
    }

    #[test]
    fn test_token_type_detection() {
        assert_eq!(TokenType::detect("مدرسة"), TokenType::Arabic);
        assert_eq!(TokenType::detect("2024"), TokenType::Num);
        assert_eq!(TokenType::detect("rust"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("…"), TokenType::Other);
        assert_eq!(TokenType::detect(""), TokenType::Other);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("سلام", 0).with_text("سلم");
        assert_eq!(format!("{token}"), "سلم");
    }
}
