//! Style template registry.
//!
//! A [`Style`] selects the instruction sent to the model as the task description. The set of
//! styles is closed; anything the registry does not recognise falls back to
//! [`Style::DEFAULT`] instead of failing.
//!
//! ```rust
//! use imageprompt::style_template::{resolve, Style};
//!
//! assert_eq!(resolve("midjourney"), Style::Midjourney.instruction());
//! assert_eq!(resolve("watercolor"), Style::Detailed.instruction());
//! ```

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const DETAILED_INSTRUCTION: &str = "Analyze this image and generate a detailed, cinematic, professional prompt \
that captures its artistic style, mood, lighting, composition, and subject matter. \
Include any references to existing products, movies, or art styles that the image resembles. \
The prompt should be descriptive enough to recreate a similar image using an image generation AI. \
Focus only on visual elements visible in the image. \
The output must be the prompt only, without any additional text.";

const MIDJOURNEY_INSTRUCTION: &str = "Analyze this image and generate a detailed MidJourney-style prompt that would recreate \
this exact image. Include specific style indicators, camera details, lighting description, \
mood, and composition. Use the syntax: [subject], [details], [environment], [lighting], \
[camera details], [style], [artist reference] --ar [aspect ratio] --v 6. \
The output must be the prompt only, without any additional text.";

const DALLE_INSTRUCTION: &str = "Analyze this image and create a detailed DALL-E style prompt that would recreate \
this exact image. Focus on subjects, artistic style, color palette, composition, and mood. \
Be specific but concise. The output must be the prompt only, without any additional text.";

/// Output flavour of the generated prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Generic cinematic description usable with any generator.
    Detailed,
    /// MidJourney syntax, including `--ar` and `--v` parameters.
    Midjourney,
    /// Concise DALL-E phrasing.
    Dalle,
}

impl Style {
    /// Every known style, in display order.
    pub const ALL: [Style; 3] = [Style::Detailed, Style::Midjourney, Style::Dalle];

    /// Style used for unknown or missing identifiers.
    pub const DEFAULT: Style = Style::Detailed;

    /// Look up a style by its exact identifier, `None` when unknown.
    pub fn lookup(style_id: &str) -> Option<Style> {
        match style_id {
            "detailed" => Some(Style::Detailed),
            "midjourney" => Some(Style::Midjourney),
            "dalle" => Some(Style::Dalle),
            _ => None,
        }
    }

    /// Resolve an identifier, mapping anything unknown (including `""`) to [`Style::DEFAULT`].
    pub fn from_id(style_id: &str) -> Style {
        match Style::lookup(style_id) {
            Some(style) => style,
            None => {
                log::debug!(
                    "Unknown style {:?}, falling back to {}",
                    style_id,
                    Style::DEFAULT
                );
                Style::DEFAULT
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Style::Detailed => "detailed",
            Style::Midjourney => "midjourney",
            Style::Dalle => "dalle",
        }
    }

    /// Instruction text sent to the model as the user task.
    pub fn instruction(self) -> &'static str {
        match self {
            Style::Detailed => DETAILED_INSTRUCTION,
            Style::Midjourney => MIDJOURNEY_INSTRUCTION,
            Style::Dalle => DALLE_INSTRUCTION,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::DEFAULT
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Parsing never fails; unknown identifiers become [`Style::DEFAULT`].
impl FromStr for Style {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Style::from_id(s))
    }
}

/// Resolve a style identifier straight to its instruction text.
pub fn resolve(style_id: &str) -> &'static str {
    Style::from_id(style_id).instruction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for style in Style::ALL {
            assert_eq!(Style::lookup(style.id()), Some(style));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Style::lookup("MidJourney"), None);
        assert_eq!(Style::from_id("DALLE"), Style::Detailed);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Style::Midjourney).unwrap();
        assert_eq!(json, "\"midjourney\"");
        let style: Style = serde_json::from_str("\"dalle\"").unwrap();
        assert_eq!(style, Style::Dalle);
    }

    #[test]
    fn instructions_demand_prompt_only_output() {
        for style in Style::ALL {
            assert!(style
                .instruction()
                .ends_with("The output must be the prompt only, without any additional text."));
        }
    }
}
