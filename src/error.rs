use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a [`TranslationSource`](crate::source::TranslationSource)
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source holds no data for this language
    #[error("Language {0} is not configured")]
    LanguageUnknown(String),

    /// The backing file could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing data is not a valid translations document
    #[error("Invalid translations in '{}': {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Errors reported by the provider, the validator and the builder
#[derive(Debug, Error)]
pub enum TranslationsError {
    /// No source recognizes the language
    #[error("Language {0} is not configured")]
    LanguageNotConfigured(String),

    /// A key is absent from one or more supported languages
    #[error("Translation with key {key} does not exist in languages {}", .languages.join(", "))]
    MissingTranslation { key: String, languages: Vec<String> },

    /// A key is supplied more than once for a language
    #[error("Translation with key {key} appears {}", format_counts(.counts))]
    DuplicatedTranslation {
        key: String,
        counts: Vec<(String, usize)>,
    },

    /// A source failed for a reason other than not knowing the language
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Invalid builder or file configuration
    #[error("{0}")]
    Config(String),
}

fn format_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(language, count)| format!("{} times in language {}", count, language))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationsError>;
