//! Arabic light stemming and root extraction.
//!
//! The engine is split into small pieces that borrow the stemmer's
//! configuration during a call:
//!
//! - [`trie`] - affix tries and boundary lookup
//! - [`star`] - starred patterns and the stem window estimate
//! - [`segment`] - candidate `(prefix, stem, suffix)` splits
//! - [`validate`] - affix-pair tables and verb/noun rules
//! - [`root`] - root extraction and selection
//!
//! The tables they consult ([`stopwords`], [`stamp`], [`dictionary`],
//! [`affixes`]) have bundled defaults, and [`ArabicLightStemmer`] ties
//! everything together.

pub mod affixes;
pub mod config;
pub mod dictionary;
pub mod letters;
pub mod normalize;
pub mod root;
pub mod segment;
pub mod stamp;
pub mod star;
pub mod stemmer;
pub mod stopwords;
pub mod trie;
pub mod validate;

pub use config::StemmerConfig;
pub use segment::{Segment, SegmentSet};
pub use stemmer::{Analysis, ArabicLightStemmer, Candidate};
pub use validate::WordClass;
