use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One translated string of a language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub value: String,
}

/// Merged view of one language together with the raw per-key counts
///
/// `entries` holds one entry per key, first source wins. `occurrences` counts
/// how many sources supplied each key before deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTranslations {
    pub entries: Vec<TranslationEntry>,
    pub occurrences: IndexMap<String, usize>,
}

/// Key → value mapping for a single language, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(pub IndexMap<String, String>);

impl Translations {
    pub fn new() -> Self {
        Translations(IndexMap::new())
    }
    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Translations(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Everything a source knows about one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageData {
    pub language: String,
    pub translations: Translations,
}

impl LanguageData {
    pub fn new(language: &str, translations: Translations) -> Self {
        LanguageData {
            language: language.to_owned(),
            translations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_keep_insertion_order() {
        let mut translations = Translations::new();
        translations
            .with_message("zeta", "Z")
            .with_message("alpha", "A")
            .with_message("mid", "M");

        let keys: Vec<&String> = translations.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(translations.get_message("alpha").map(String::as_str), Some("A"));
        assert_eq!(translations.get_message("nope"), None);
    }

    #[test]
    fn test_collect_translations() {
        let translations: Translations = [("hello", "Hello"), ("world", "World")]
            .into_iter()
            .collect();
        assert_eq!(translations.len(), 2);
        assert!(!translations.is_empty());
    }
}
