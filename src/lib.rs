//! # arabic-stemmer
//!
//! A configurable Arabic light stemmer and root extractor.
//!
//! ## Features
//!
//! - Affix segmentation driven by prefix/suffix tries and affix-pair tables
//! - Verb and noun stem validation
//! - Starred patterns and root extraction against a root dictionary
//! - Stopword lookup for closed-class words
//! - Analysis pipeline (char filters, tokenizer, token filters) for indexing
//!
//! ## Example
//!
//! ```
//! use arabic_stemmer::arabic::ArabicLightStemmer;
//!
//! let stemmer = ArabicLightStemmer::new();
//! assert_eq!(stemmer.light_stem("الكاتب"), "كاتب");
//! ```

pub mod analysis;
pub mod arabic;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
