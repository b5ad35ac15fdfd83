//! Description port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::description::DescriptionRequest;
use crate::domain::error::ImageEncodeError;

/// Description errors
#[derive(Debug, Clone, Error)]
pub enum DescriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] ImageEncodeError),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for generating a short description of clipboard content
#[async_trait]
pub trait Describer: Send + Sync {
    /// Describe the content in one to two sentences.
    ///
    /// Returns the model's first completion, trimmed of surrounding
    /// whitespace. Issues exactly one request per call.
    async fn describe(&self, request: &DescriptionRequest) -> Result<String, DescriptionError>;
}
