//! CLI argument definitions using Clap

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::infrastructure::{ClipboardBackend, CopyToolPreference};

/// AltScribe - AI-generated alt text for whatever you have highlighted
///
/// Copies the current selection, asks a vision-capable model for a one to
/// two sentence description and puts that description on the clipboard.
#[derive(Parser, Debug)]
#[command(name = "alt-scribe")]
#[command(version)]
#[command(about = "Generate alt text for highlighted text or images using an AI model")]
pub struct Cli {
    /// Describe the current clipboard without sending the copy shortcut
    #[arg(long)]
    pub no_copy: bool,

    /// Model to use (must accept image input)
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Milliseconds to wait after the copy shortcut
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Tool that sends the copy shortcut (Linux: enigo, auto, ydotool, xdotool, wtype)
    #[arg(long, value_name = "TOOL")]
    pub copy_tool: Option<String>,

    /// Clipboard backend (arboard, wayland)
    #[arg(long, value_name = "BACKEND")]
    pub clipboard_backend: Option<String>,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub trigger_copy: bool,
    pub copy_delay: Duration,
    pub copy_tool: CopyToolPreference,
    pub clipboard_backend: ClipboardBackend,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "base_url",
    "max_tokens",
    "copy_delay_ms",
    "trigger_copy",
    "notify",
    "clipboard_backend",
    "linux.copy_tool",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
