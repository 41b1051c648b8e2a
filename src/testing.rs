//! Test doubles shared by the unit and integration tests

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SourceError;
use crate::messages::{LanguageData, Translations};
use crate::source::{MemorySource, TranslationSource};

/// How a [`CountingSource`] answers `read`
#[derive(Debug, Clone)]
pub enum ReadMode {
    /// Answer from the registered translations
    Data,
    /// Fail every read with `LanguageUnknown`
    Unknown,
    /// Fail every read with `Malformed`
    Malformed(String),
}

/// Source that records how often it was read
#[derive(Debug)]
pub struct CountingSource {
    inner: MemorySource,
    mode: ReadMode,
    reads: AtomicUsize,
}

impl CountingSource {
    pub fn new() -> Self {
        CountingSource {
            inner: MemorySource::named("counting"),
            mode: ReadMode::Data,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_mode(mut self, mode: ReadMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with(mut self, language: &str, pairs: &[(&str, &str)]) -> Self {
        let translations: Translations = pairs.iter().copied().collect();
        self.inner = self.inner.with_messages_for_language(language, translations);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TranslationSource for CountingSource {
    fn languages(&self) -> Vec<String> {
        self.inner.languages()
    }

    fn read(&self, language: &str) -> Result<LanguageData, SourceError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            ReadMode::Data => self.inner.read(language),
            ReadMode::Unknown => Err(SourceError::LanguageUnknown(language.to_string())),
            ReadMode::Malformed(reason) => Err(SourceError::Malformed {
                path: PathBuf::from(format!("{}.json", language)),
                reason: reason.clone(),
            }),
        }
    }

    fn source_name(&self) -> &str {
        "counting"
    }
}
