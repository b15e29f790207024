//! The `GroqClient` struct implements [`VisionClient`] for Groq's OpenAI-compatible chat
//! completions endpoint.
//!
//! The client owns its HTTP connection pool and credential; it is meant to be built once at
//! startup and shared (behind an `Arc`) by every request.
//!
//! # Example
//!
//! ```rust,no_run
//! use imageprompt::clients::groq::GroqClient;
//! use imageprompt::ImagePromptConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImagePromptConfig::from_env()?;
//! let client = GroqClient::from_config(&config)?;
//! println!("Using {}", imageprompt::VisionClient::model_name(&client));
//! # Ok(())
//! # }
//! ```

use crate::imageprompt::client_wrapper::{Completion, ModelRequest, VisionClient};
use crate::imageprompt::clients::common::send_chat_completion;
use crate::imageprompt::clients::http_pool::build_http_client;
use crate::imageprompt::config::ImagePromptConfig;
use crate::imageprompt::error::{PromptError, PromptResult};
use async_trait::async_trait;

/// Vision-capable models served by Groq.
pub enum Model {
    /// `meta-llama/llama-4-scout-17b-16e-instruct`
    Llama4Scout,
    /// `meta-llama/llama-4-maverick-17b-128e-instruct`
    Llama4Maverick,
}

/// Convert a [`Model`] variant into the string identifier expected by the REST API.
pub fn model_to_string(model: Model) -> String {
    match model {
        Model::Llama4Scout => "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
        Model::Llama4Maverick => "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
    }
}

/// Client wrapper for Groq's chat completions API.
pub struct GroqClient {
    http: reqwest::Client,
    /// Full `.../chat/completions` URL.
    endpoint: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    /// Build a client from the process configuration.
    pub fn from_config(config: &ImagePromptConfig) -> PromptResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PromptError::invalid_input("Backend API key is empty"));
        }
        Ok(GroqClient {
            http: build_http_client(config.request_timeout)?,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Build a client for `model` against the default Groq endpoint.
    pub fn new_with_model_enum(secret_key: &str, model: Model) -> PromptResult<Self> {
        Self::from_config(&ImagePromptConfig {
            api_key: secret_key.to_string(),
            model: model_to_string(model),
            ..ImagePromptConfig::default()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VisionClient for GroqClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ModelRequest) -> PromptResult<Completion> {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "GroqClient::complete(...): model={} inline_image={}",
                request.model,
                request.image_source.is_inline()
            );
        }
        send_chat_completion(&self.http, &self.endpoint, &self.api_key, request).await
    }
}
