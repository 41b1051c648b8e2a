use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Result, TranslationsError};
use crate::options::{CacheOptions, ProviderOptions};
use crate::provider::TranslationProvider;
use crate::source::json::json_files_in_dir;
use crate::source::{JsonFileSource, TranslationSource};

/// Fluent setup for a [`TranslationProvider`]
///
/// All JSON files are served by a single [`JsonFileSource`], which takes
/// precedence over sources added with [`add_source`](Self::add_source).
/// File and folder paths are checked as soon as they are added.
///
/// # Example
///
/// ```no_run
/// use lingua_i18n::{CacheOptions, TranslationProviderBuilder};
///
/// fn main() -> Result<(), lingua_i18n::TranslationsError> {
///     let _provider = TranslationProviderBuilder::new()
///         .base_directory("resources")
///         .add_json_file("languages/en.json")?
///         .add_json_file("languages/ua.json")?
///         .default_language("en")
///         .cache(CacheOptions::read_all_to_cache())
///         .build()?;
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct TranslationProviderBuilder {
    base_directory: Option<PathBuf>,
    json_files: Vec<PathBuf>,
    sources: Vec<Arc<dyn TranslationSource>>,
    options: ProviderOptions,
}

impl TranslationProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory relative file and folder paths are resolved against
    pub fn base_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.base_directory = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn add_json_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = self.resolve(path.as_ref());
        if !path.is_file() {
            return Err(TranslationsError::Config(format!(
                "File {} does not exist",
                path.display()
            )));
        }
        self.json_files.push(path);
        Ok(self)
    }

    /// Add every `*.json` file of a folder
    pub fn add_json_files_from_folder(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let dir = self.resolve(path.as_ref());
        let files = json_files_in_dir(&dir)?;
        self.json_files.extend(files);
        Ok(self)
    }

    pub fn add_source(mut self, source: Arc<dyn TranslationSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn default_language(mut self, language: &str) -> Self {
        self.options.default_language = Some(language.to_string());
        self
    }

    pub fn cache(mut self, cache: CacheOptions) -> Self {
        self.options.cache = cache;
        self
    }

    pub fn options(mut self, options: ProviderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<TranslationProvider> {
        let mut sources: Vec<Arc<dyn TranslationSource>> = Vec::new();
        if !self.json_files.is_empty() {
            sources.push(Arc::new(JsonFileSource::new(self.json_files)?));
        }
        sources.extend(self.sources);
        TranslationProvider::new(sources, self.options)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_directory {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TranslationLookup;
    use crate::source::MemorySource;
    use std::fs;
    use tempfile::TempDir;

    fn fixtures() -> TempDir {
        let dir = TempDir::new().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();
        fs::write(
            languages.join("en.json"),
            r#"{"language": "en", "translations": {"hello text": "Hello", "world text": "World"}}"#,
        )
        .unwrap();
        fs::write(
            languages.join("ua.json"),
            r#"{"language": "ua", "translations": {"hello text": "Привіт"}}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_build_from_files() {
        let dir = fixtures();
        let provider = TranslationProviderBuilder::new()
            .base_directory(dir.path())
            .add_json_file("languages/en.json")
            .unwrap()
            .add_json_file("languages/ua.json")
            .unwrap()
            .default_language("en")
            .cache(CacheOptions::read_all_to_cache())
            .build()
            .unwrap();

        assert_eq!(provider.supported_languages(), vec!["en", "ua"]);
        assert_eq!(
            provider.translate("ua", "world text").unwrap().as_deref(),
            Some("World")
        );
        assert_eq!(provider.options().cache, CacheOptions::ReadAllToCache);
    }

    #[test]
    fn test_build_from_folder() {
        let dir = fixtures();
        let provider = TranslationProviderBuilder::new()
            .base_directory(dir.path())
            .add_json_files_from_folder("languages")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(provider.supported_languages(), vec!["en", "ua"]);
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let dir = fixtures();
        let result = TranslationProviderBuilder::new()
            .base_directory(dir.path())
            .add_json_file("languages/fr.json");
        match result {
            Err(TranslationsError::Config(msg)) => assert!(msg.contains("does not exist")),
            Err(other) => panic!("Expected Config error, got {:?}", other),
            Ok(_) => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_missing_folder_fails_fast() {
        let dir = fixtures();
        let result = TranslationProviderBuilder::new()
            .base_directory(dir.path())
            .add_json_files_from_folder("nowhere");
        assert!(matches!(result, Err(TranslationsError::Config(_))));
    }

    #[test]
    fn test_json_files_take_precedence_over_added_sources() {
        let dir = fixtures();
        let mut overrides = MemorySource::named("overrides");
        overrides.add_message("en", "hello text", "Hi");
        overrides.add_message("en", "extra", "Extra");

        let provider = TranslationProviderBuilder::new()
            .add_source(Arc::new(overrides))
            .add_json_file(dir.path().join("languages/en.json"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(provider.translate("en", "hello text").unwrap().as_deref(), Some("Hello"));
        assert_eq!(provider.translate("en", "extra").unwrap().as_deref(), Some("Extra"));
    }

    #[test]
    fn test_options_replace_earlier_settings() {
        let provider = TranslationProviderBuilder::new()
            .default_language("ua")
            .options(ProviderOptions::default().with_default_language("en"))
            .build()
            .unwrap();
        assert_eq!(provider.options().default_language.as_deref(), Some("en"));
        assert_eq!(provider.options().cache, CacheOptions::NoCache);
    }
}
