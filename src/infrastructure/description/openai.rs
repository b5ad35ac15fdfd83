//! OpenAI-compatible chat completions describer

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Describer, DescriptionError};
use crate::domain::config::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::domain::description::{DescriptionPrompt, DescriptionRequest};

// Request types for the chat completions API

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

// Response types for the chat completions API

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Describer backed by an OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAiDescriber {
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiDescriber {
    /// Create a new describer with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            // No overall timeout; the transport defaults apply
            client: reqwest::Client::new(),
        }
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different API root, e.g. a proxy or a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Change the output token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn system_message(prompt: &DescriptionPrompt) -> Message {
        Message {
            role: "system",
            content: MessageContent::Text(prompt.system().to_string()),
        }
    }

    /// Build the request body
    fn build_request(&self, request: &DescriptionRequest) -> Result<ChatRequest, DescriptionError> {
        let user = match request {
            DescriptionRequest::Image { prompt, image } => {
                let (width, height) = image.dimensions();
                debug!("Describing a {}x{} image", width, height);
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: prompt.user().to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.to_data_uri()?,
                            },
                        },
                    ]),
                }
            }
            DescriptionRequest::Text { prompt, text } => {
                debug!("Describing {} characters of text", text.chars().count());
                Message {
                    role: "user",
                    content: MessageContent::Text(prompt.user().to_string()),
                }
            }
        };

        Ok(ChatRequest {
            model: self.model.clone(),
            messages: vec![Self::system_message(request.prompt()), user],
            max_tokens: self.max_tokens,
        })
    }

    /// Extract the first choice's content
    fn extract_text(response: &ChatResponse) -> Option<&str> {
        response
            .choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

#[async_trait]
impl Describer for OpenAiDescriber {
    async fn describe(&self, request: &DescriptionRequest) -> Result<String, DescriptionError> {
        let url = self.api_url();
        let body = self.build_request(request)?;

        debug!("Requesting {} description from {} ({})", request.kind(), url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DescriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DescriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DescriptionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DescriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DescriptionError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(DescriptionError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(DescriptionError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DescriptionError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}
