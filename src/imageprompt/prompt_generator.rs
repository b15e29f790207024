//! Prompt generation service.
//!
//! [`PromptGenerator`] ties the pieces together: it normalizes an [`ImageReference`], builds a
//! [`ModelRequest`] around the chosen instruction, makes exactly one bounded call to the injected
//! [`VisionClient`] and returns the trimmed text. Every failure comes back as a classified
//! [`PromptError`]; nothing is retried or cached.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use imageprompt::clients::groq::GroqClient;
//! use imageprompt::{ImagePromptConfig, ImageReference, PromptGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     imageprompt::init_logger();
//!
//!     let config = ImagePromptConfig::from_env()?;
//!     let client = Arc::new(GroqClient::from_config(&config)?);
//!     let generator = PromptGenerator::new(client, config.request_timeout);
//!
//!     let image = ImageReference::remote("https://example.com/lighthouse.jpg")?;
//!     let prompt = generator.generate_prompt(&image, "midjourney").await?;
//!     println!("{}", prompt);
//!     Ok(())
//! }
//! ```

use crate::imageprompt::client_wrapper::{ModelRequest, VisionClient};
use crate::imageprompt::error::{PromptError, PromptResult};
use crate::imageprompt::image_source::ImageReference;
use crate::imageprompt::style_template;
use std::sync::Arc;
use std::time::Duration;

/// Turns images into prompts through a shared backend client.
///
/// Cloning is cheap; clones share the same client.
#[derive(Clone)]
pub struct PromptGenerator {
    client: Arc<dyn VisionClient>,
    timeout: Duration,
}

impl PromptGenerator {
    /// `timeout` bounds each backend call; file reading is not counted against it.
    pub fn new(client: Arc<dyn VisionClient>, timeout: Duration) -> Self {
        PromptGenerator { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve `style_id` and generate a prompt for `image`.
    ///
    /// Unknown style identifiers use the detailed template.
    pub async fn generate_prompt(&self, image: &ImageReference, style_id: &str) -> PromptResult {
        self.generate(image, style_template::resolve(style_id)).await
    }

    /// Generate a prompt for `image` using `instruction` as the task description.
    pub async fn generate(&self, image: &ImageReference, instruction: &str) -> PromptResult {
        let request = self.build_request(image, instruction).await?;

        log::info!(
            "Requesting prompt from {} ({} image)",
            request.model,
            if request.image_source.is_inline() {
                "inline"
            } else {
                "remote"
            }
        );

        let completion = match tokio::time::timeout(self.timeout, self.client.complete(&request))
            .await
        {
            Ok(Ok(completion)) => completion,
            Ok(Err(err)) => {
                log::error!("Error generating image prompt: {}", err);
                return Err(err);
            }
            Err(_) => {
                let err = PromptError::timeout(format!(
                    "Model call exceeded {} ms",
                    self.timeout.as_millis()
                ));
                log::error!("Error generating image prompt: {}", err);
                return Err(err);
            }
        };

        if let Some(usage) = &completion.usage {
            log::debug!(
                "Token usage: input={} output={} total={}",
                usage.input_tokens,
                usage.output_tokens,
                usage.total_tokens
            );
        }

        Ok(completion.text.trim().to_string())
    }

    /// Normalize `image` and build the request that [`PromptGenerator::generate`] would send.
    pub async fn build_request(
        &self,
        image: &ImageReference,
        instruction: &str,
    ) -> PromptResult<ModelRequest> {
        let image_source = image.normalize().await.map_err(|err| {
            log::error!("Error preparing image: {}", err);
            err
        })?;
        Ok(ModelRequest::new(
            self.client.model_name(),
            instruction,
            image_source,
        ))
    }
}
