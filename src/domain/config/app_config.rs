//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default chat model; must accept image input
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Cap on generated output tokens
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Pause after the copy key-chord so the OS can update the clipboard
pub const DEFAULT_COPY_DELAY_MS: u64 = 500;

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub copy_tool: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub copy_delay_ms: Option<u64>,
    pub trigger_copy: Option<bool>,
    pub notify: Option<bool>,
    pub clipboard_backend: Option<String>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            copy_delay_ms: Some(DEFAULT_COPY_DELAY_MS),
            trigger_copy: Some(true),
            notify: Some(false),
            clipboard_backend: Some("arboard".to_string()),
            linux: Some(LinuxConfig {
                copy_tool: Some("enigo".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            base_url: other.base_url.or(self.base_url),
            max_tokens: other.max_tokens.or(self.max_tokens),
            copy_delay_ms: other.copy_delay_ms.or(self.copy_delay_ms),
            trigger_copy: other.trigger_copy.or(self.trigger_copy),
            notify: other.notify.or(self.notify),
            clipboard_backend: other.clipboard_backend.or(self.clipboard_backend),
            linux: match (self.linux, other.linux) {
                (None, None) => None,
                (Some(b), None) => Some(b),
                (None, Some(o)) => Some(o),
                (Some(b), Some(o)) => Some(LinuxConfig {
                    copy_tool: o.copy_tool.or(b.copy_tool),
                }),
            },
        }
    }

    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn max_tokens_or_default(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Settle delay after triggering a copy
    pub fn copy_delay_or_default(&self) -> Duration {
        Duration::from_millis(self.copy_delay_ms.unwrap_or(DEFAULT_COPY_DELAY_MS))
    }

    /// Whether to send the copy key-chord, true if not set
    pub fn trigger_copy_or_default(&self) -> bool {
        self.trigger_copy.unwrap_or(true)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    pub fn clipboard_backend_or_default(&self) -> &str {
        self.clipboard_backend.as_deref().unwrap_or("arboard")
    }

    /// Get copy tool preference, or "enigo" if not set
    pub fn copy_tool_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.copy_tool.as_deref())
            .unwrap_or("enigo")
    }
}
