//! Arabic light stemmer adapter for the stem filter.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use super::Stemmer;
use crate::arabic::ArabicLightStemmer;

/// What an [`ArabicStemmer`] reduces words to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StemTarget {
    /// The light stem, with affixes removed.
    #[default]
    Stem,
    /// The extracted root.
    Root,
}

/// A [`Stemmer`] backed by a shared [`ArabicLightStemmer`].
///
/// Clones share the engine, so a call to [`ArabicStemmer::reconfigure`]
/// is seen by every analyzer holding a clone.
#[derive(Clone, Debug)]
pub struct ArabicStemmer {
    engine: Arc<RwLock<ArabicLightStemmer>>,
    target: StemTarget,
}

impl ArabicStemmer {
    pub fn new() -> Self {
        Self::with_engine(ArabicLightStemmer::new())
    }

    pub fn with_engine(engine: ArabicLightStemmer) -> Self {
        ArabicStemmer {
            engine: Arc::new(RwLock::new(engine)),
            target: StemTarget::Stem,
        }
    }

    pub fn target(mut self, target: StemTarget) -> Self {
        self.target = target;
        self
    }

    pub fn stem_target(&self) -> StemTarget {
        self.target
    }

    /// Change the engine configuration.
    ///
    /// The change is applied to a copy, which replaces the engine once
    /// complete. Stemming calls running meanwhile see the old engine.
    /// Concurrent reconfigurations run one after another, each starting from
    /// the engine the previous one stored.
    pub fn reconfigure<F>(&self, f: F)
    where
        F: FnOnce(&mut ArabicLightStemmer),
    {
        let current = self.engine.upgradable_read();
        let mut engine = ArabicLightStemmer::clone(&current);
        f(&mut engine);
        *RwLockUpgradableReadGuard::upgrade(current) = engine;
    }

    /// A snapshot of the current engine.
    pub fn engine(&self) -> ArabicLightStemmer {
        self.engine.read().clone()
    }
}

impl Default for ArabicStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for ArabicStemmer {
    fn stem(&self, word: &str) -> String {
        let engine = self.engine.read();
        match self.target {
            StemTarget::Stem => engine.light_stem(word),
            StemTarget::Root => engine.choose_root(word),
        }
    }

    fn name(&self) -> &'static str {
        "arabic"
    }
}
