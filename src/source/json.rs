use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{SourceError, TranslationsError};
use crate::messages::{LanguageData, Translations};
use crate::source::TranslationSource;

/// Source reading one JSON document per language
///
/// Each file has the following structure:
/// ```json
/// {
///     "language": "en",
///     "translations": {
///         "hello text": "Hello",
///         "world text": "World"
///     }
/// }
/// ```
///
/// The files are indexed by language when the source is created. Every
/// [`read`](TranslationSource::read) loads the file again, so edits on disk are
/// visible to providers that do not cache.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: String,
    files: IndexMap<String, PathBuf>,
}

impl JsonFileSource {
    /// Index the given files by the language they declare
    ///
    /// # Errors
    /// - A file cannot be read or is not a valid translations document
    /// - Two files declare the same language
    pub fn new(files: Vec<PathBuf>) -> Result<Self, TranslationsError> {
        let documents = files
            .par_iter()
            .map(|path| load_document(path).map(|data| (data.language, path.clone())))
            .collect::<Result<Vec<_>, SourceError>>()?;

        let mut index: IndexMap<String, PathBuf> = IndexMap::new();
        for (language, path) in documents {
            if let Some(existing) = index.get(&language) {
                return Err(TranslationsError::Config(format!(
                    "Language {} is declared in both '{}' and '{}'",
                    language,
                    existing.display(),
                    path.display()
                )));
            }
            debug!("Indexed language '{}' from {}", language, path.display());
            index.insert(language, path);
        }

        Ok(JsonFileSource {
            name: "json".to_string(),
            files: index,
        })
    }

    /// File backing a language, if indexed
    pub fn file_for(&self, language: &str) -> Option<&Path> {
        self.files.get(language).map(PathBuf::as_path)
    }
}

impl TranslationSource for JsonFileSource {
    fn languages(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn read(&self, language: &str) -> Result<LanguageData, SourceError> {
        let path = self
            .files
            .get(language)
            .ok_or_else(|| SourceError::LanguageUnknown(language.to_string()))?;

        let data = load_document(path)?;
        if data.language != language {
            return Err(SourceError::Malformed {
                path: path.clone(),
                reason: format!(
                    "declares language {} but was indexed as {}",
                    data.language, language
                ),
            });
        }
        Ok(data)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// List the `*.json` files of a directory, sorted by path
///
/// # Errors
/// - Directory not found
/// - Directory entries cannot be read
pub fn json_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, TranslationsError> {
    if !dir.is_dir() {
        return Err(TranslationsError::Config(format!(
            "Folder {} does not exist",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|e| SourceError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        // Only process JSON files
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        files.push(path);
    }
    files.sort();

    if files.is_empty() {
        warn!("No JSON files found in directory {}", dir.display());
    }

    Ok(files)
}

/// Load and check a single translations document
fn load_document(path: &Path) -> Result<LanguageData, SourceError> {
    let malformed = |reason: &str| SourceError::Malformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let content = fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if content.trim().is_empty() {
        return Err(malformed("file is empty"));
    }

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| malformed(&format!("invalid JSON: {}", e)))?;
    let obj = json
        .as_object()
        .ok_or_else(|| malformed("root must be an object"))?;

    let language = obj
        .get("language")
        .and_then(Value::as_str)
        .filter(|language| !language.is_empty())
        .ok_or_else(|| malformed("language does not exist"))?;
    let entries = obj
        .get("translations")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("translations does not exist"))?;

    let mut translations = Translations::new();
    for (key, value) in entries {
        if let Some(message) = value.as_str() {
            translations.with_message(key, message);
        } else {
            warn!(
                "Translation '{}' in {} is not a string, skipping",
                key,
                path.display()
            );
        }
    }

    Ok(LanguageData::new(language, translations))
}
