//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LinuxConfig};
use crate::domain::error::ConfigError;
use crate::infrastructure::clipboard::ClipboardBackend;
use crate::infrastructure::copy_trigger::VALID_COPY_TOOLS;

use super::app::{EXIT_ERROR, EXIT_USAGE_ERROR};
use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

/// Exit status for a failed config command: bad keys or values are usage errors
pub fn config_exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
        _ => EXIT_ERROR,
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let path = store.init().await?;
    presenter.success(&format!("Config file created at: {}", path.display()));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    store
        .update(|config| apply_config_value(config, key, value))
        .await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => {
            if value.trim().is_empty() {
                return Err(invalid(key, "Model name must not be empty"));
            }
            config.model = Some(value.to_string());
        }
        "base_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(invalid(key, "Value must start with http:// or https://"));
            }
            config.base_url = Some(value.trim_end_matches('/').to_string());
        }
        "max_tokens" => {
            let tokens = value
                .parse::<u32>()
                .ok()
                .filter(|t| *t > 0)
                .ok_or_else(|| invalid(key, "Value must be a positive integer"))?;
            config.max_tokens = Some(tokens);
        }
        "copy_delay_ms" => {
            let delay = value
                .parse::<u64>()
                .map_err(|_| invalid(key, "Value must be a whole number of milliseconds"))?;
            config.copy_delay_ms = Some(delay);
        }
        "trigger_copy" => config.trigger_copy = Some(parse_bool_for(key, value)?),
        "notify" => config.notify = Some(parse_bool_for(key, value)?),
        "clipboard_backend" => {
            let backend = value
                .parse::<ClipboardBackend>()
                .map_err(|e| invalid(key, &e))?;
            config.clipboard_backend = Some(backend.to_string());
        }
        "linux.copy_tool" => {
            let lower = value.to_lowercase();
            if !VALID_COPY_TOOLS.contains(&lower.as_str()) {
                return Err(invalid(
                    key,
                    &format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_COPY_TOOLS.join(", ")
                    ),
                ));
            }
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .copy_tool = Some(lower);
        }
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

/// Read a single key for display; the API key is masked
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "model" => config.model.clone(),
        "base_url" => config.base_url.clone(),
        "max_tokens" => config.max_tokens.map(|t| t.to_string()),
        "copy_delay_ms" => config.copy_delay_ms.map(|d| d.to_string()),
        "trigger_copy" => config.trigger_copy.map(|b| b.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "clipboard_backend" => config.clipboard_backend.clone(),
        "linux.copy_tool" => config.linux.as_ref().and_then(|l| l.copy_tool.clone()),
        _ => None,
    }
}

fn display_value(key: &str, value: &str) -> String {
    if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
