// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generator configuration and its storage port.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::emit::DEFAULT_ORDERING_CONST;

/// Key the generator config is stored under.
pub const CONFIG_KEY: &str = "emoji-ordering";

/// Upstream ordering document (googlefonts/emoji-metadata).
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/googlefonts/emoji-metadata/main/emoji_17_0_ordering.json";

/// Where the generated table is written by default.
pub const DEFAULT_OUTPUT: &str = "src/google_ordering.rs";

/// Persisted generator settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// URL of the ordering JSON document.
    pub source_url: String,
    /// Path of the generated Rust file.
    pub output: PathBuf,
    /// Name of the generated ordering constant.
    pub ordering_const: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ordering_const: DEFAULT_ORDERING_CONST.to_owned(),
        }
    }
}

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
    /// Human-readable location of `key`, for messages.
    fn locate(&self, key: &str) -> String;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// The generator config, or defaults when none is stored.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        Ok(self.load(CONFIG_KEY)?.unwrap_or_default())
    }

    /// Where the generator config lives.
    pub fn generator_config_location(&self) -> String {
        self.store.locate(CONFIG_KEY)
    }
}
