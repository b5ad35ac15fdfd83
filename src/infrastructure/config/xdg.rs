//! TOML config file under the platform config directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    AppConfig, DEFAULT_BASE_URL, DEFAULT_COPY_DELAY_MS, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
use crate::domain::error::ConfigError;

const APP_DIR: &str = "alt-scribe";
const FILE_NAME: &str = "config.toml";

/// Config store backed by `<config dir>/alt-scribe/config.toml`.
///
/// The config dir is `$XDG_CONFIG_HOME` (or `~/.config`) on Linux and the
/// platform equivalent elsewhere.
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));

        Self::with_path(base.join(APP_DIR).join(FILE_NAME))
    }

    /// Store at an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Starter file written by `config init`; every value is a default
    fn template() -> String {
        format!(
            r#"# alt-scribe configuration
#
# Environment variables (OPENAI_API_KEY, OPENAI_BASE_URL) and command line
# flags override the values below.

# API key for the description service. Prefer OPENAI_API_KEY or a .env file.
# api_key = "sk-..."

# Chat model; it must accept image input.
model = "{model}"

# Root of an OpenAI-compatible API.
base_url = "{base_url}"

# Upper bound on the length of a generated description, in tokens.
max_tokens = {max_tokens}

# Send the copy shortcut before reading the clipboard.
trigger_copy = true

# Pause after the copy shortcut, in milliseconds.
copy_delay_ms = {copy_delay_ms}

# Show a desktop notification when a run finishes.
notify = false

# Clipboard access: "arboard" or "wayland" (wl-paste / wl-copy).
clipboard_backend = "arboard"

[linux]
# Copy shortcut sender: enigo, auto, ydotool, xdotool or wtype.
copy_tool = "enigo"
"#,
            model = DEFAULT_MODEL,
            base_url = DEFAULT_BASE_URL,
            max_tokens = DEFAULT_MAX_TOKENS,
            copy_delay_ms = DEFAULT_COPY_DELAY_MS,
        )
    }

    fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Write through a sibling temp file so a crash never leaves half a config
    async fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
        let write_err = |e: std::io::Error| ConfigError::WriteError(e.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let staging = path.with_extension("toml.tmp");
        fs::write(&staging, content).await.map_err(write_err)?;
        fs::rename(&staging, path).await.map_err(write_err)
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}", self.path.display());
                Ok(AppConfig::empty())
            }
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Self::write_file(&self.path, &content).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    async fn init(&self) -> Result<PathBuf, ConfigError> {
        if fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(ConfigError::AlreadyExists(self.path.display().to_string()));
        }

        Self::write_file(&self.path, &Self::template()).await?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, XdgConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join(FILE_NAME));
        (dir, store)
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("alt-scribe/config.toml"));
    }

    #[test]
    fn template_parses_to_defaults() {
        let parsed = XdgConfigStore::parse(&XdgConfigStore::template()).unwrap();
        let defaults = AppConfig::defaults();

        assert!(parsed.api_key.is_none());
        assert_eq!(parsed.model, defaults.model);
        assert_eq!(parsed.base_url, defaults.base_url);
        assert_eq!(parsed.max_tokens, defaults.max_tokens);
        assert_eq!(parsed.copy_delay_ms, defaults.copy_delay_ms);
        assert_eq!(parsed.trigger_copy, defaults.trigger_copy);
        assert_eq!(parsed.notify, defaults.notify);
        assert_eq!(parsed.clipboard_backend, defaults.clipboard_backend);
        assert_eq!(parsed.copy_tool_or_default(), "enigo");
    }

    #[test]
    fn parse_linux_table() {
        let config = XdgConfigStore::parse(
            r#"
model = "gpt-4o-mini"
copy_delay_ms = 250

[linux]
copy_tool = "xdotool"
"#,
        )
        .unwrap();
        assert_eq!(config.model_or_default(), "gpt-4o-mini");
        assert_eq!(config.copy_delay_ms, Some(250));
        assert_eq!(config.copy_tool_or_default(), "xdotool");
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = XdgConfigStore::parse("max_tokens = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        let config = store.load().await.unwrap();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
    }

    #[tokio::test]
    async fn init_writes_commented_template_once() {
        let (_dir, store) = temp_store();

        let written = store.init().await.unwrap();
        assert_eq!(written, store.path());

        let content = fs::read_to_string(&written).await.unwrap();
        assert!(content.starts_with("# alt-scribe configuration"));
        assert_eq!(store.load().await.unwrap().max_tokens, Some(100));

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn update_saves_edits_and_leaves_no_staging_file() {
        let (dir, store) = temp_store();

        store
            .update(|config| {
                config.notify = Some(true);
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(store.load().await.unwrap().notify, Some(true));
        let staging = dir.path().join("nested").join("config.toml.tmp");
        assert!(!staging.exists());
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() {
        let (_dir, store) = temp_store();

        let err = store
            .update(|_| {
                Err(ConfigError::ValidationError {
                    key: "notify".to_string(),
                    message: "bad".to_string(),
                })
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!store.path().exists());
    }
}
