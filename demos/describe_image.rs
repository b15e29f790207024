//! Generate an image-generation prompt for a local file or a URL.
//!
//! Run with:
//!
//! ```bash
//! GROQ_API_KEY="gsk_..." RUST_LOG=info \
//! cargo run --example describe_image -- photos/harbor.jpg midjourney
//! ```

use imageprompt::clients::groq::GroqClient;
use imageprompt::image_source;
use imageprompt::upload::UploadPolicy;
use imageprompt::{ImagePromptConfig, ImageReference, PromptGenerator, PromptResult, Style};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    imageprompt::init_logger();

    let mut args = std::env::args().skip(1);
    let image_arg = match args.next() {
        Some(arg) => arg,
        None => {
            let styles: Vec<&str> = Style::ALL.iter().map(|s| s.id()).collect();
            eprintln!(
                "usage: describe_image <path-or-url> [{}]",
                styles.join("|")
            );
            std::process::exit(2);
        }
    };
    let style_id = args.next().unwrap_or_else(|| Style::DEFAULT.id().to_string());

    let config = ImagePromptConfig::from_env()?;
    log::info!("Loaded configuration: {:?}", config);
    let client = Arc::new(GroqClient::from_config(&config)?);
    let generator = PromptGenerator::new(client, config.request_timeout);

    let generated = match prepare(&image_arg).await {
        Ok(image) => generator.generate_prompt(&image, &style_id).await,
        Err(err) => Err(err),
    };

    match generated {
        Ok(prompt) => {
            println!("{}", prompt);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error generating image prompt: {}", err);
            if err.kind().is_retryable() {
                eprintln!("The failure may be temporary; try again.");
            }
            std::process::exit(1);
        }
    }
}

async fn prepare(image_arg: &str) -> PromptResult<ImageReference> {
    match ImageReference::parse(image_arg)? {
        ImageReference::LocalFile { path } => {
            let (_, bytes) = image_source::read_local(&path).await?;
            UploadPolicy::default().accept(&path.to_string_lossy(), bytes)
        }
        remote => Ok(remote),
    }
}
