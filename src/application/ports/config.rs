//! Configuration storage port

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Persistent settings shared by every run
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Stored settings. A store with nothing saved yields `AppConfig::empty()`.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored settings
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location shown to the user by `config path`
    fn path(&self) -> PathBuf;

    /// Write a commented starter file and return where it went.
    /// Fails with `ConfigError::AlreadyExists` rather than overwrite.
    async fn init(&self) -> Result<PathBuf, ConfigError>;

    /// Load, let `edit` change the settings, then save them.
    ///
    /// Nothing is written when `edit` fails.
    async fn update<F>(&self, edit: F) -> Result<AppConfig, ConfigError>
    where
        Self: Sized,
        F: FnOnce(&mut AppConfig) -> Result<(), ConfigError> + Send,
    {
        let mut config = self.load().await?;
        edit(&mut config)?;
        self.save(&config).await?;
        Ok(config)
    }
}
