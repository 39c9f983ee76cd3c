//! Regex-based tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{Result, StemmerError};

/// Separators for Arabic text: anything that is neither a word character, a
/// diacritic nor an apostrophe.
pub const ARABIC_SEPARATOR_PATTERN: &str = r"[^\w\x{064b}-\x{0652}']+";

/// A tokenizer that extracts regex matches, or the gaps between them.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a tokenizer matching runs of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer that splits Arabic text on separators, keeping
    /// diacritics attached to their letters.
    pub fn arabic() -> Result<Self> {
        Self::with_gaps(ARABIC_SEPARATOR_PATTERN)
    }

    fn compile(pattern: &str) -> Result<Arc<Regex>> {
        Regex::new(pattern)
            .map(Arc::new)
            .map_err(|e| StemmerError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Self::compile(pattern)?,
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts the text between matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Self::compile(pattern)?,
            gaps: true,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

fn make_token(text: &str, position: usize, start: usize, end: usize) -> Token {
    Token::with_offsets(text, position, start, end).with_token_type(TokenType::detect(text))
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    let position = tokens.len();
                    tokens.push(make_token(
                        &text[last_end..mat.start()],
                        position,
                        last_end,
                        mat.start(),
                    ));
                }
                last_end = mat.end();
            }

            if last_end < text.len() {
                let position = tokens.len();
                tokens.push(make_token(&text[last_end..], position, last_end, text.len()));
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| make_token(mat.as_str(), position, mat.start(), mat.end()))
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_arabic_tokenizer_keeps_diacritics() {
        let tokenizer = RegexTokenizer::arabic().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("كَتَبَ الطالبُ، الدرسَ.")
            .unwrap()
            .collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["كَتَبَ", "الطالبُ", "الدرسَ"]);
        assert_eq!(tokens[2].position, 2);
        assert_eq!(
            tokens[0].metadata.as_ref().unwrap().token_type,
            Some(TokenType::Arabic)
        );
    }

    #[test]
    fn test_arabic_tokenizer_offsets() {
        let tokenizer = RegexTokenizer::arabic().unwrap();
        let text = "في البيت";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "البيت");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            RegexTokenizer::with_pattern("("),
            Err(StemmerError::Analysis(_))
        ));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::arabic().unwrap().name(), "regex");
    }
}
