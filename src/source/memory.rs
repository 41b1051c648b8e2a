use indexmap::IndexMap;

use crate::error::SourceError;
use crate::messages::{LanguageData, Translations};
use crate::source::TranslationSource;

/// Source holding translations built in code
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    // Keyed by language, then by message key
    // e.g. messages["en"]["greeting"] = "Hello"
    //      messages["ua"]["greeting"] = "Привіт"
    messages: IndexMap<String, Translations>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: &str) -> Self {
        MemorySource {
            name: name.to_string(),
            messages: IndexMap::new(),
        }
    }

    /// Register the translations of a language, replacing any earlier ones
    pub fn with_messages_for_language(mut self, language: &str, messages: Translations) -> Self {
        self.messages.insert(language.to_string(), messages);
        self
    }

    pub fn add_message(&mut self, language: &str, key: &str, message: &str) {
        self.messages
            .entry(language.to_string())
            .or_insert_with(Translations::new)
            .with_message(key, message);
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationSource for MemorySource {
    fn languages(&self) -> Vec<String> {
        self.messages.keys().cloned().collect()
    }

    fn read(&self, language: &str) -> Result<LanguageData, SourceError> {
        self.messages
            .get(language)
            .map(|messages| LanguageData::new(language, messages.clone()))
            .ok_or_else(|| SourceError::LanguageUnknown(language.to_string()))
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_known_language() {
        let mut en = Translations::new();
        en.with_message("hello", "Hello");
        let source = MemorySource::new().with_messages_for_language("en", en);

        let data = source.read("en").unwrap();
        assert_eq!(data.language, "en");
        assert_eq!(
            data.translations.get_message("hello").map(String::as_str),
            Some("Hello")
        );
    }

    #[test]
    fn test_read_unknown_language() {
        let source = MemorySource::new();
        match source.read("fr") {
            Err(SourceError::LanguageUnknown(language)) => assert_eq!(language, "fr"),
            other => panic!("Expected LanguageUnknown, got {:?}", other),
        }
    }

    #[test]
    fn test_languages_in_registration_order() {
        let mut source = MemorySource::named("fixtures");
        source.add_message("ua", "hello", "Привіт");
        source.add_message("en", "hello", "Hello");
        source.add_message("ua", "world", "Світ");

        assert_eq!(source.languages(), vec!["ua".to_string(), "en".to_string()]);
        assert_eq!(source.read("ua").unwrap().translations.len(), 2);
        assert_eq!(source.source_name(), "fixtures");
    }

    #[test]
    fn test_language_tags_are_case_sensitive() {
        let mut source = MemorySource::new();
        source.add_message("en", "hello", "Hello");
        assert!(source.read("EN").is_err());
    }
}
