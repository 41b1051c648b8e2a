//! Multi-source translation provider
//!
//! [`TranslationProvider`] merges any number of [`TranslationSource`]s into one
//! logical provider. Sources are consulted in the order they were given: when
//! two sources supply the same key for a language, the first one wins.
//!
//! Lookups go through the configured [`CacheOptions`]:
//!
//! - `NoCache` reads the sources on every lookup
//! - `InMemory` reads the sources on a miss and caches found values until they expire
//! - `ReadAllToCache` loads every language when the provider is built and only
//!   consults the cache afterwards
//!
//! A key that is absent in the requested language is retried in the default
//! language, if one is configured. An absent key is `Ok(None)`; an unknown
//! language is [`TranslationsError::LanguageNotConfigured`].

use indexmap::IndexSet;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use crate::cache::{Cache, InMemoryCache};
use crate::error::{Result, SourceError, TranslationsError};
use crate::messages::{LanguageTranslations, TranslationEntry};
use crate::options::{CacheOptions, ProviderOptions};
use crate::source::TranslationSource;

/// Cache identity of a translation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub language: String,
    pub key: String,
}

impl TranslationKey {
    pub fn new(language: &str, key: &str) -> Self {
        TranslationKey {
            language: language.to_owned(),
            key: key.to_owned(),
        }
    }
}

/// Read side of a translation provider
///
/// The validator and the per-language [`Translator`](crate::Translator) views
/// only depend on this trait.
pub trait TranslationLookup: Send + Sync {
    /// Every language known to at least one source, in first-seen order
    fn supported_languages(&self) -> Vec<String>;

    /// Merged translations of a language plus how many times each key is
    /// supplied over all sources, collected in a single pass
    fn read_language(&self, language: &str) -> Result<LanguageTranslations>;

    /// Merged translations of a language, one entry per key
    fn read_translations(&self, language: &str) -> Result<Vec<TranslationEntry>> {
        self.read_language(language).map(|merged| merged.entries)
    }

    /// Resolve a key, falling back to the default language
    fn translate(&self, language: &str, key: &str) -> Result<Option<String>>;
}

/// Provider aggregating several sources behind one cache
pub struct TranslationProvider {
    sources: Vec<Arc<dyn TranslationSource>>,
    options: ProviderOptions,
    cache: Box<dyn Cache<TranslationKey, String>>,
}

impl TranslationProvider {
    /// Create a provider with its own [`InMemoryCache`]
    ///
    /// With [`CacheOptions::ReadAllToCache`] every language is read here, so
    /// source failures surface from this call.
    pub fn new(sources: Vec<Arc<dyn TranslationSource>>, options: ProviderOptions) -> Result<Self> {
        Self::with_cache(
            sources,
            options,
            Box::new(InMemoryCache::<TranslationKey, String>::new()),
        )
    }

    /// Create a provider that stores cached translations in `cache`
    pub fn with_cache(
        sources: Vec<Arc<dyn TranslationSource>>,
        options: ProviderOptions,
        cache: Box<dyn Cache<TranslationKey, String>>,
    ) -> Result<Self> {
        let provider = TranslationProvider {
            sources,
            options,
            cache,
        };
        if provider.options.cache == CacheOptions::ReadAllToCache {
            provider.preload()?;
        }
        Ok(provider)
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    fn preload(&self) -> Result<()> {
        let languages = self.supported_languages();
        let loaded = languages
            .par_iter()
            .map(|language| {
                self.read_translations(language)
                    .map(|entries| (language.as_str(), entries))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut stored = 0;
        for (language, entries) in loaded {
            for entry in entries {
                let cache_key = TranslationKey::new(language, &entry.key);
                if self.cache.set_if_absent(cache_key, entry.value, None) {
                    stored += 1;
                }
            }
        }
        info!(
            "Preloaded {} translations for {} languages",
            stored,
            languages.len()
        );
        Ok(())
    }

    /// Walk every source's translations for a language in source order
    ///
    /// Sources that do not know the language are skipped; any other source
    /// failure aborts the walk.
    fn visit_sources<F>(&self, language: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(String, String),
    {
        let mut known_language = false;
        for source in &self.sources {
            match source.read(language) {
                Ok(data) => {
                    known_language = true;
                    for (key, value) in data.translations.0 {
                        visit(key, value);
                    }
                }
                Err(SourceError::LanguageUnknown(_)) => {
                    debug!(
                        "Source '{}' has no translations for '{}'",
                        source.source_name(),
                        language
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        if !known_language {
            return Err(TranslationsError::LanguageNotConfigured(
                language.to_string(),
            ));
        }
        Ok(())
    }

    fn read_translation(&self, language: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .read_translations(language)?
            .into_iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value))
    }

    /// Resolve a key in exactly one language
    fn translate_to(&self, language: &str, key: &str) -> Result<Option<String>> {
        let cache_key = TranslationKey::new(language, key);
        match self.options.cache {
            CacheOptions::NoCache => self.read_translation(language, key),
            CacheOptions::InMemory { .. } => {
                if let Some(value) = self.cache.get(&cache_key) {
                    debug!("Cache hit for '{}' in '{}'", key, language);
                    return Ok(Some(value));
                }
                debug!("Cache miss for '{}' in '{}'", key, language);
                let value = self.read_translation(language, key)?;
                if let Some(value) = &value {
                    self.cache
                        .set(cache_key, value.clone(), self.options.cache.expire());
                }
                Ok(value)
            }
            CacheOptions::ReadAllToCache => {
                if let Some(value) = self.cache.get(&cache_key) {
                    return Ok(Some(value));
                }
                if !self.supported_languages().iter().any(|l| l == language) {
                    return Err(TranslationsError::LanguageNotConfigured(
                        language.to_string(),
                    ));
                }
                Ok(None)
            }
        }
    }
}

impl TranslationLookup for TranslationProvider {
    fn supported_languages(&self) -> Vec<String> {
        let per_source: Vec<Vec<String>> = self
            .sources
            .par_iter()
            .map(|source| source.languages())
            .collect();
        let languages: IndexSet<String> = per_source.into_iter().flatten().collect();
        languages.into_iter().collect()
    }

    fn read_language(&self, language: &str) -> Result<LanguageTranslations> {
        let mut merged = LanguageTranslations::default();
        self.visit_sources(language, |key, value| {
            let count = merged.occurrences.entry(key.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                merged.entries.push(TranslationEntry { key, value });
            }
        })?;
        Ok(merged)
    }

    fn translate(&self, language: &str, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.translate_to(language, key)? {
            return Ok(Some(value));
        }

        match self.options.default_language.as_deref() {
            Some(default) if default != language => {
                debug!(
                    "Falling back to '{}' for '{}' (requested: '{}')",
                    default, key, language
                );
                self.translate_to(default, key)
            }
            _ => Ok(None),
        }
    }
}
