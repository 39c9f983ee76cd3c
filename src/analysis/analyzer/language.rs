//! Language-specific analyzers.
//!
//! # Available Languages
//!
//! - [`arabic`] - Arabic text analysis with normalization, Arabic stopwords
//!   and light stemming
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::analyzer::analyzer::Analyzer;
//! use arabic_stemmer::analysis::analyzer::language::arabic::ArabicAnalyzer;
//!
//! let analyzer = ArabicAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("ذهب الولد إلى المدرسة").unwrap().collect();
//!
//! // "إلى" is filtered as a stopword
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod arabic;
