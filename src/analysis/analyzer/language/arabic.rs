use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::arabic_normalize::ArabicNormalizationCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::{ArabicStemmer, StemFilter, StemTarget};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

pub struct ArabicAnalyzer {
    inner: PipelineAnalyzer,
    stemmer: ArabicStemmer,
}

impl ArabicAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_stemmer(ArabicStemmer::new())
    }

    /// An analyzer that indexes roots instead of stems.
    pub fn roots() -> Result<Self> {
        Self::with_stemmer(ArabicStemmer::new().target(StemTarget::Root))
    }

    pub fn with_stemmer(stemmer: ArabicStemmer) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::arabic()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(ArabicNormalizationCharFilter::new()))
            .add_filter(Arc::new(StopFilter::default()))
            .add_filter(Arc::new(StemFilter::with_stemmer(Box::new(stemmer.clone()))))
            .with_name("arabic");

        Ok(Self {
            inner: analyzer,
            stemmer,
        })
    }

    /// The stemmer shared with the pipeline, for reconfiguration.
    pub fn stemmer(&self) -> &ArabicStemmer {
        &self.stemmer
    }
}

impl Default for ArabicAnalyzer {
    fn default() -> Self {
        Self::new().expect("Arabic analyzer should be creatable with default settings")
    }
}

impl Analyzer for ArabicAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "arabic"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for ArabicAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArabicAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
