//! Consistency check over all configured translations
//!
//! The validator reads every supported language through the provider and
//! checks that each key exists in every language, exactly once. It stops at
//! the first violation. Languages are visited in supported-language order and
//! keys in the order they are first seen, so the reported violation is stable.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{Result, TranslationsError};
use crate::provider::TranslationLookup;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationValidator;

impl ConfigurationValidator {
    pub fn new() -> Self {
        ConfigurationValidator
    }

    /// Check that every key is translated once in every supported language
    ///
    /// # Errors
    /// - [`TranslationsError::MissingTranslation`] with every language lacking the key
    /// - [`TranslationsError::DuplicatedTranslation`] with the per-language counts
    ///   of a key supplied by more than one source
    /// - Any error raised while reading the translations
    pub fn validate<P>(&self, provider: &P) -> Result<()>
    where
        P: TranslationLookup + ?Sized,
    {
        let supported_languages = provider.supported_languages();

        // key -> languages it was found in
        let mut languages_by_key: IndexMap<String, IndexSet<String>> = IndexMap::new();
        // key -> language -> occurrences before deduplication
        let mut occurrences_by_key: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();

        for language in &supported_languages {
            let merged = provider.read_language(language)?;
            for entry in merged.entries {
                languages_by_key
                    .entry(entry.key)
                    .or_default()
                    .insert(language.clone());
            }
            for (key, count) in merged.occurrences {
                occurrences_by_key
                    .entry(key)
                    .or_default()
                    .insert(language.clone(), count);
            }
        }

        for (key, found_in) in &languages_by_key {
            if found_in.len() < supported_languages.len() {
                let missing: Vec<String> = supported_languages
                    .iter()
                    .filter(|language| !found_in.contains(*language))
                    .cloned()
                    .collect();
                return Err(TranslationsError::MissingTranslation {
                    key: key.clone(),
                    languages: missing,
                });
            }

            let duplicated: Vec<(String, usize)> = occurrences_by_key
                .get(key)
                .into_iter()
                .flatten()
                .filter(|(_, count)| **count > 1)
                .map(|(language, count)| (language.clone(), *count))
                .collect();
            if !duplicated.is_empty() {
                return Err(TranslationsError::DuplicatedTranslation {
                    key: key.clone(),
                    counts: duplicated,
                });
            }
        }

        debug!(
            "Validated {} keys across {} languages",
            languages_by_key.len(),
            supported_languages.len()
        );
        Ok(())
    }
}
