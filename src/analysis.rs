//! Text analysis for Arabic.
//!
//! Char filters normalize raw text, tokenizers split it, and token filters
//! remove stopwords and stem what remains. Analyzers wire the three stages
//! together and map token offsets back onto the raw text.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
