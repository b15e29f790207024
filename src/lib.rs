//! # imageprompt
//!
//! imageprompt turns an image into a ready-to-use prompt for image-generation tools by asking a
//! hosted multimodal Large Language Model to describe it in a chosen style.
//!
//! The crate provides small, layered pieces:
//!
//! * **Style Templates**: [`Style`] is the closed set of prompt flavours (detailed, MidJourney,
//!   DALL-E); [`style_template::resolve`] maps any identifier to an instruction, falling back
//!   to the detailed template for unknown names.
//! * **Image Normalization**: [`ImageReference`] describes where an image comes from (remote
//!   URL, local file, or uploaded bytes) and normalizes it into an [`ImageSource`]: remote URLs
//!   pass through, local content becomes an inline `data:image/<ext>;base64,...` URL.
//! * **Prompt Generation**: [`PromptGenerator`] builds one [`client_wrapper::ModelRequest`] per
//!   call, sends it through an injected [`VisionClient`] with a timeout, and returns trimmed text.
//! * **Provider Flexibility**: [`VisionClient`] is implemented for Groq's OpenAI-compatible API
//!   by [`clients::groq::GroqClient`]; tests and other providers plug in their own implementation.
//! * **Classified Failures**: every error is a [`PromptError`] with an [`ErrorKind`]
//!   (`InvalidInput`, `NotFound`, `BackendError`, `Timeout`) so callers can tell retryable
//!   failures from bad input.
//!
//! ## Core Concepts
//!
//! ### Styles
//!
//! ```rust
//! use imageprompt::{style_template, Style};
//!
//! assert_eq!(Style::from_id("dalle"), Style::Dalle);
//! assert_eq!(Style::from_id(""), Style::Detailed);
//! assert_eq!(style_template::resolve("unknown"), Style::Detailed.instruction());
//! ```
//!
//! ### Uploads
//!
//! Prompt generation does not police file types or sizes; a caller that accepts uploads runs
//! them through an [`upload::UploadPolicy`] first:
//!
//! ```rust
//! use imageprompt::upload::UploadPolicy;
//! use imageprompt::ErrorKind;
//!
//! let policy = UploadPolicy::default();
//! let image = policy.accept("cat.png", vec![0x89, 0x50, 0x4E, 0x47]).unwrap();
//! let rejected = policy.accept("cat.svg", vec![b'<']).unwrap_err();
//! assert_eq!(rejected.kind(), ErrorKind::InvalidInput);
//! # let _ = image;
//! ```
//!
//! ## Getting Started
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
//!     // Fails here, at startup, when GROQ_API_KEY is missing.
//!     let config = ImagePromptConfig::from_env()?;
//!     let client = Arc::new(GroqClient::from_config(&config)?);
//!     let generator = PromptGenerator::new(client, config.request_timeout);
//!
//!     let image = ImageReference::parse("photos/harbor.jpg")?;
//!     match generator.generate_prompt(&image, "detailed").await {
//!         Ok(prompt) => println!("{}", prompt),
//!         Err(err) if err.kind().is_retryable() => eprintln!("try again later: {}", err),
//!         Err(err) => eprintln!("bad request: {}", err),
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// Applications embedding imageprompt can opt in to simple `RUST_LOG` driven diagnostics
/// without choosing a logging backend upfront.
///
/// ```rust
/// imageprompt::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `imageprompt` module.
pub mod imageprompt;

// Re-exporting key items for easier external access.
pub use imageprompt::client_wrapper;
pub use imageprompt::client_wrapper::{Completion, ModelRequest, TokenUsage, VisionClient};
pub use imageprompt::clients;
pub use imageprompt::config::ImagePromptConfig;
pub use imageprompt::error;
pub use imageprompt::error::{ErrorKind, PromptError, PromptResult};
pub use imageprompt::image_source;
pub use imageprompt::image_source::{ImageReference, ImageSource};
pub use imageprompt::prompt_generator::PromptGenerator;
pub use imageprompt::style_template;
pub use imageprompt::style_template::Style;
pub use imageprompt::upload;
