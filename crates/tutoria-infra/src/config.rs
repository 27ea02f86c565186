//! Process configuration from the environment.
//!
//! The relay needs two external inputs to run: a listen port (handled by
//! the CLI layer) and the Gemini credential. This module resolves the
//! provider settings. A missing API key is a startup error -- the server
//! refuses to boot rather than failing every request later.

use secrecy::SecretString;

/// Environment variable holding the Gemini API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model identifier.
const MODEL_VAR: &str = "GEMINI_MODEL";

/// Environment variable overriding the provider base URL.
const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

/// Model used when `GEMINI_MODEL` is unset.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Provider settings resolved from the environment.
pub struct ProviderSettings {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: Option<String>,
}

/// Errors resolving configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),
}

impl ProviderSettings {
    /// Resolve provider settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup(BASE_URL_VAR),
        })
    }
}
