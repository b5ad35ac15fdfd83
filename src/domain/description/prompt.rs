//! Description prompt value object

/// System instruction for describing images
const IMAGE_INSTRUCTION: &str = "You are a helpful assistant that provides concise summaries of images for alt text in just one to two sentences. Do not include the words image of or image of this.";

/// User message accompanying the image
const IMAGE_REQUEST: &str = "Please describe the content of this image. Be concise.";

/// System instruction for summarizing text
const TEXT_INSTRUCTION: &str = "You are a helpful assistant that provides concise summaries of text for alt text in just one to two sentences. Make sure to limit your response to only alt text for the content. If there's too much content, just try to give a concise summary in one sentence.";

/// Prefix for the user message carrying the copied text
const TEXT_REQUEST_PREFIX: &str = "Provide a one to two sentence description of the following text: ";

/// Value object pairing the fixed system instruction with the user message
/// for one kind of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionPrompt {
    system: String,
    user: String,
}

impl DescriptionPrompt {
    /// Prompt for an image; the image itself travels alongside the user text
    pub fn for_image() -> Self {
        Self {
            system: IMAGE_INSTRUCTION.to_string(),
            user: IMAGE_REQUEST.to_string(),
        }
    }

    /// Prompt embedding the copied text in the user message
    pub fn for_text(text: &str) -> Self {
        Self {
            system: TEXT_INSTRUCTION.to_string(),
            user: format!("{}{}", TEXT_REQUEST_PREFIX, text),
        }
    }

    /// System role instruction
    pub fn system(&self) -> &str {
        &self.system
    }

    /// User role message text
    pub fn user(&self) -> &str {
        &self.user
    }
}
