use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// How the provider caches resolved translations
///
/// Chosen once when the provider is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheOptions {
    /// Every lookup reads the sources
    #[default]
    NoCache,
    /// Lookups read the sources on a miss and remember the value until it expires
    InMemory {
        #[serde(
            rename = "expire_secs",
            serialize_with = "serialize_secs",
            deserialize_with = "deserialize_secs"
        )]
        expire: Duration,
    },
    /// All translations are loaded when the provider is built; sources are not read afterwards
    ReadAllToCache,
}

impl CacheOptions {
    pub fn no_cache() -> Self {
        CacheOptions::NoCache
    }

    pub fn in_memory(expire: Duration) -> Self {
        CacheOptions::InMemory { expire }
    }

    pub fn read_all_to_cache() -> Self {
        CacheOptions::ReadAllToCache
    }

    /// Time-to-live for entries written on a lazy miss
    pub fn expire(&self) -> Option<Duration> {
        match self {
            CacheOptions::InMemory { expire } => Some(*expire),
            _ => None,
        }
    }
}

fn serialize_secs<S: Serializer>(expire: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(expire.as_secs())
}

fn deserialize_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// Immutable provider configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// Language queried when a key is absent in the requested language
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub cache: CacheOptions,
}

impl ProviderOptions {
    pub fn new(cache: CacheOptions) -> Self {
        ProviderOptions {
            default_language: None,
            cache,
        }
    }

    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = Some(language.to_string());
        self
    }
}
