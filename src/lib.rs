//! Translation lookup aggregated from multiple sources
//!
//! # Overview
//!
//! 1. **Sources** supply translations per language ([`JsonFileSource`], [`MemorySource`])
//! 2. **Provider** merges the sources, caches lookups and falls back to a default language
//! 3. **Validator** checks that every key is translated once in every language
//! 4. **Translators** are per-language views over a shared provider
//!
//! # Example
//!
//! ```
//! use lingua_i18n::{
//!     CacheOptions, ConfigurationValidator, MemorySource, TranslationProviderBuilder,
//!     Translations, TranslatorFactory,
//! };
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let en: Translations = [("hello text", "Hello")].into_iter().collect();
//!     let ua: Translations = [("hello text", "Привіт")].into_iter().collect();
//!     let source = MemorySource::new()
//!         .with_messages_for_language("en", en)
//!         .with_messages_for_language("ua", ua);
//!
//!     // JSON files would be added with `add_json_files_from_folder`
//!     let provider = TranslationProviderBuilder::new()
//!         .add_source(Arc::new(source))
//!         .default_language("en")
//!         .cache(CacheOptions::read_all_to_cache())
//!         .build()?;
//!
//!     ConfigurationValidator::new().validate(&provider)?;
//!
//!     let factory = TranslatorFactory::new(Arc::new(provider));
//!     let ua = factory.create_for_language("ua");
//!     assert_eq!(ua.translate("hello text")?.as_deref(), Some("Привіт"));
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod messages;
pub mod options;
pub mod provider;
pub mod source;
pub mod translator;
pub mod validator;

#[cfg(test)]
mod testing;


// Re-export main types for convenient access
pub use builder::TranslationProviderBuilder;
pub use cache::{Cache, InMemoryCache};
pub use error::{Result, SourceError, TranslationsError};
pub use messages::{LanguageData, LanguageTranslations, TranslationEntry, Translations};
pub use options::{CacheOptions, ProviderOptions};
pub use provider::{TranslationKey, TranslationLookup, TranslationProvider};
pub use source::{JsonFileSource, MemorySource, TranslationSource};
pub use translator::{Translator, TranslatorFactory};
pub use validator::ConfigurationValidator;
