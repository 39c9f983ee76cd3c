//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`ArabicAnalyzer`](super::language::arabic::ArabicAnalyzer) - Arabic light stemming
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::analyzer::analyzer::Analyzer;
//! use arabic_stemmer::analysis::analyzer::language::arabic::ArabicAnalyzer;
//!
//! let analyzer = ArabicAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("الكاتب في البيت").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "كاتب");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    ///
    /// ```
    /// use arabic_stemmer::analysis::analyzer::analyzer::Analyzer;
    /// use arabic_stemmer::analysis::analyzer::language::arabic::ArabicAnalyzer;
    ///
    /// let arabic = ArabicAnalyzer::new().unwrap();
    /// let analyzer: &dyn Analyzer = &arabic;
    /// assert!(analyzer.as_any().downcast_ref::<ArabicAnalyzer>().is_some());
    /// ```
    fn as_any(&self) -> &dyn std::any::Any;
}
