use std::sync::Arc;

use crate::error::Result;
use crate::provider::TranslationLookup;

/// Per-language view over a shared provider
#[derive(Clone)]
pub struct Translator {
    provider: Arc<dyn TranslationLookup>,
    language: String,
}

impl Translator {
    pub fn new(provider: Arc<dyn TranslationLookup>, language: &str) -> Self {
        Translator {
            provider,
            language: language.to_string(),
        }
    }

    /// The language `translate` looks up
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translate a key into the bound language
    pub fn translate(&self, key: &str) -> Result<Option<String>> {
        self.translate_to(&self.language, key)
    }

    /// Translate a key into any language, ignoring the bound one
    pub fn translate_to(&self, language: &str, key: &str) -> Result<Option<String>> {
        self.provider.translate(language, key)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .finish()
    }
}

/// Hands out [`Translator`]s that share one provider
#[derive(Clone)]
pub struct TranslatorFactory {
    provider: Arc<dyn TranslationLookup>,
}

impl TranslatorFactory {
    pub fn new(provider: Arc<dyn TranslationLookup>) -> Self {
        TranslatorFactory { provider }
    }

    /// Bind a language. The language is not checked until the first lookup.
    pub fn create_for_language(&self, language: &str) -> Translator {
        Translator::new(Arc::clone(&self.provider), language)
    }
}
