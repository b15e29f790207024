// src/imageprompt/mod.rs

pub mod client_wrapper;
pub mod clients;
pub mod config;
pub mod error;
pub mod image_source;
pub mod prompt_generator;
pub mod style_template;
pub mod upload;

// Let's explicitly export PromptGenerator so we don't have to access it via
// imageprompt::prompt_generator::PromptGenerator and instead as imageprompt::PromptGenerator
pub use prompt_generator::PromptGenerator;
