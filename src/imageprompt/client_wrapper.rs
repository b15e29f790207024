//! A [`VisionClient`] is a wrapper around a hosted multimodal model.
//! It accepts a system instruction, a user instruction and one image, and returns text.
//! It keeps no per-call state; everything a call needs travels in the [`ModelRequest`].

use crate::imageprompt::error::PromptResult;
use crate::imageprompt::image_source::ImageSource;
use async_trait::async_trait;

/// Fixed system instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert at analyzing images and generating detailed, accurate prompts for image generation tools. \
Focus on visual elements, style, composition, lighting, and mood. \
Your response should only contain the prompt text with no additional commentary.";

/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 500;

/// Low temperature keeps repeated calls on the same image stable.
pub const TEMPERATURE: f32 = 0.2;

/// A single, immutable request to the model backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: &'static str,
    pub user_instruction: String,
    pub image_source: ImageSource,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ModelRequest {
    pub fn new(model: &str, user_instruction: &str, image_source: ImageSource) -> Self {
        ModelRequest {
            system_instruction: SYSTEM_INSTRUCTION,
            user_instruction: user_instruction.to_string(),
            image_source,
            model: model.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// How many tokens were spent on prompt vs. completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub total_tokens: usize,
}

/// Raw text returned by the backend, before trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Completion {
            text: text.into(),
            usage: None,
        }
    }
}

/// Trait defining the interface to a multimodal model backend.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Identifier of the model placed into each [`ModelRequest`].
    fn model_name(&self) -> &str;

    /// Send one request and return the first completion.
    /// Implementations report transport and protocol failures as `BackendError` and
    /// elapsed deadlines as `Timeout`; they never retry.
    async fn complete(&self, request: &ModelRequest) -> PromptResult<Completion>;
}
