//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: Normalizes raw text
//! 2. Tokenizer: Splits text into tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! Token offsets always refer to the original text.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::analysis::analyzer::analyzer::Analyzer;
//! use arabic_stemmer::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use arabic_stemmer::analysis::char_filter::arabic_normalize::ArabicNormalizationCharFilter;
//! use arabic_stemmer::analysis::tokenizer::regex::RegexTokenizer;
//! use arabic_stemmer::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::arabic().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_char_filter(Arc::new(ArabicNormalizationCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["في"])))
//!     .with_name("my_custom_analyzer");
//!
//! let tokens: Vec<_> = analyzer.analyze("الدَّرْسُ في الكتاب").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "الدرس");
//! assert_eq!(tokens[1].text, "الكتاب");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Run every char filter in order, keeping the transformations of each.
    fn normalize(&self, text: &str) -> (String, OffsetMap) {
        let mut normalized = text.to_string();
        let mut layers = Vec::with_capacity(self.char_filters.len());
        for char_filter in &self.char_filters {
            let (next, transformations) = char_filter.filter(&normalized);
            normalized = next;
            layers.push(transformations);
        }
        (normalized, OffsetMap { layers })
    }
}

/// Byte offset mapping from the char-filtered text back to the raw text.
#[derive(Debug, Default)]
struct OffsetMap {
    /// One entry per char filter, in the order the filters ran.
    layers: Vec<Vec<Transformation>>,
}

impl OffsetMap {
    fn is_identity(&self) -> bool {
        self.layers.iter().all(Vec::is_empty)
    }

    /// Undo the char filters from last to first.
    fn to_original(&self, offset: usize) -> usize {
        self.layers
            .iter()
            .rev()
            .fold(offset, |offset, layer| Self::undo_layer(offset, layer))
    }

    /// Map an offset through one filter's transformations, sorted by position.
    fn undo_layer(offset: usize, layer: &[Transformation]) -> usize {
        let mut shift: isize = 0;
        for t in layer {
            let original_len = t.original_end - t.original_start;
            let new_len = t.new_end - t.new_start;
            if offset >= t.new_end {
                shift += original_len as isize - new_len as isize;
            } else if offset >= t.new_start {
                // Inside a replacement, scale into the original span.
                return t.original_start + (offset - t.new_start) * original_len / new_len;
            } else {
                break;
            }
        }
        offset.saturating_add_signed(shift)
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let (normalized, offsets) = self.normalize(text);

        let tokens = self
            .filters
            .iter()
            .try_fold(self.tokenizer.tokenize(&normalized)?, |tokens, filter| {
                filter.filter(tokens)
            })?;

        if offsets.is_identity() {
            return Ok(tokens);
        }
        Ok(Box::new(tokens.map(move |mut token| {
            token.start_offset = offsets.to_original(token.start_offset);
            token.end_offset = offsets.to_original(token.end_offset);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
