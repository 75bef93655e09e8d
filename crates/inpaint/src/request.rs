//! Request and outcome types for inpainting submissions

use serde::{Deserialize, Serialize};

use crate::store::StoredImage;

/// Prompt substituted when the user leaves the prompt empty
pub const DEFAULT_PROMPT: &str = "Realistic photo";

/// One inpainting submission: encoded image and mask plus the prompts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InpaintRequest {
    /// Encoded PNG of the photograph
    pub original_image: Vec<u8>,
    /// Encoded PNG of the painted mask
    pub mask_image: Vec<u8>,
    /// What to generate in the masked regions
    pub prompt: String,
    /// What to keep out of the result
    pub negative_prompt: String,
}

impl InpaintRequest {
    pub fn new(
        original_image: Vec<u8>,
        mask_image: Vec<u8>,
        prompt: impl Into<String>,
        negative_prompt: impl Into<String>,
    ) -> Self {
        Self {
            original_image,
            mask_image,
            prompt: prompt.into(),
            negative_prompt: negative_prompt.into(),
        }
    }

    /// The prompt to run with, falling back to [`DEFAULT_PROMPT`] when empty
    pub fn prompt_or_default(&self) -> &str {
        if self.prompt.is_empty() {
            DEFAULT_PROMPT
        } else {
            &self.prompt
        }
    }
}

/// A backend's answer to a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InpaintOutcome {
    /// Stored copy of the submitted photograph
    pub original: StoredImage,
    /// Stored copy of the submitted mask
    pub mask: StoredImage,
    /// Prompt the backend ran with (defaulted when the request left it empty)
    pub prompt: String,
    /// Negative prompt, passed through verbatim
    pub negative_prompt: String,
}
