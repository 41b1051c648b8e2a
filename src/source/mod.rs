//! Translation sources
//!
//! A source supplies translations for zero or more languages. The provider
//! holds several sources at once and merges them; each source only has to
//! answer for the languages it knows and report every other language as
//! [`SourceError::LanguageUnknown`].
//!
//! Two implementations ship with the crate:
//!
//! - [`JsonFileSource`] reads one JSON document per language from disk
//! - [`MemorySource`] holds translations built in code
//!
//! # Example
//!
//! ```
//! use lingua_i18n::{MemorySource, TranslationSource, Translations};
//!
//! let mut en = Translations::new();
//! en.with_message("hello", "Hello");
//!
//! let source = MemorySource::new().with_messages_for_language("en", en);
//! assert_eq!(source.languages(), vec!["en".to_string()]);
//! ```

pub mod json;
pub mod memory;

pub use json::JsonFileSource;
pub use memory::MemorySource;

use crate::error::SourceError;
use crate::messages::LanguageData;

/// Provider of translations for a set of languages
///
/// Sources are shared read-only between the provider and whoever built them,
/// and may be read from several threads at once.
pub trait TranslationSource: Send + Sync {
    /// Languages this source can answer for
    fn languages(&self) -> Vec<String>;

    /// Read all translations of a language
    ///
    /// # Returns
    ///
    /// * `Ok(LanguageData)` - The translations the source holds for the language
    /// * `Err(SourceError::LanguageUnknown)` - The source has no data for the language
    /// * `Err(_)` - Any other failure; the provider propagates it unchanged
    fn read(&self, language: &str) -> Result<LanguageData, SourceError>;

    /// Name used in log output
    fn source_name(&self) -> &str;
}
