//! Configuration for imageprompt.
//!
//! Provides the [`ImagePromptConfig`] struct holding the backend credential, endpoint, model and
//! request timeout. Users construct it manually or read it once at startup with
//! [`ImagePromptConfig::from_env`]; no config-file parsing is involved.
//!
//! # Example
//!
//! ```rust
//! use imageprompt::ImagePromptConfig;
//! use std::time::Duration;
//!
//! let config = ImagePromptConfig {
//!     api_key: "gsk_test".to_string(),
//!     request_timeout: Duration::from_secs(20),
//!     ..ImagePromptConfig::default()
//! };
//! assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
//! ```

use crate::imageprompt::error::{PromptError, PromptResult};
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const TIMEOUT_VAR: &str = "IMAGEPROMPT_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings needed to build a backend client and the generation service.
#[derive(Clone)]
pub struct ImagePromptConfig {
    /// Credential for the model backend.
    pub api_key: String,
    /// OpenAI-compatible API root, without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    /// Bound on a single model call, connect time included.
    pub request_timeout: Duration,
}

impl ImagePromptConfig {
    /// Read the configuration from the process environment.
    ///
    /// Fails when `GROQ_API_KEY` is missing or blank, so a misconfigured process stops at
    /// startup instead of on its first request.
    pub fn from_env() -> PromptResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ImagePromptConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> PromptResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PromptError::invalid_input(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = ImagePromptConfig {
            api_key,
            ..ImagePromptConfig::default()
        };

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PromptError::invalid_input(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_VAR, raw
                ))
            })?;
            if secs == 0 {
                return Err(PromptError::invalid_input(format!(
                    "{} must be greater than zero",
                    TIMEOUT_VAR
                )));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for ImagePromptConfig {
    /// Groq endpoint and Llama 4 Scout with an empty credential.
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ImagePromptConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePromptConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imageprompt::error::ErrorKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = ImagePromptConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().contains(API_KEY_VAR));

        let err =
            ImagePromptConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config =
            ImagePromptConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "gsk_abc")])).unwrap();
        assert_eq!(config.api_key, "gsk_abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn overrides_are_read() {
        let config = ImagePromptConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "gsk_abc"),
            (BASE_URL_VAR, "http://127.0.0.1:9000/v1/"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        for raw in ["soon", "0"] {
            let err = ImagePromptConfig::from_lookup(lookup_from(&[
                (API_KEY_VAR, "gsk_abc"),
                (TIMEOUT_VAR, raw),
            ]))
            .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn debug_redacts_the_key() {
        let config = ImagePromptConfig {
            api_key: "gsk_secret".to_string(),
            ..ImagePromptConfig::default()
        };
        assert!(!format!("{:?}", config).contains("gsk_secret"));
    }
}
