//! Cross-platform copy trigger using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::application::ports::{CopyTrigger, CopyTriggerError};

/// Copy modifier for the current platform
#[cfg(target_os = "macos")]
const COPY_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const COPY_MODIFIER: Key = Key::Control;

const COPY_KEY: Key = Key::Unicode('c');

/// Cross-platform copy trigger using enigo
pub struct EnigoCopyTrigger;

impl EnigoCopyTrigger {
    /// Create a new enigo copy trigger
    pub fn new() -> Self {
        Self
    }

    fn press_chord(enigo: &mut Enigo) -> Result<(), CopyTriggerError> {
        let failed = |e: enigo::InputError| CopyTriggerError::TriggerFailed(e.to_string());

        enigo.key(COPY_MODIFIER, Direction::Press).map_err(failed)?;

        let chord = enigo
            .key(COPY_KEY, Direction::Press)
            .and_then(|_| enigo.key(COPY_KEY, Direction::Release));

        // Release the modifier even if the key itself failed
        let release = enigo.key(COPY_MODIFIER, Direction::Release);

        chord.map_err(failed)?;
        release.map_err(failed)
    }
}

impl Default for EnigoCopyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyTrigger for EnigoCopyTrigger {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
                CopyTriggerError::TriggerFailed(format!("Failed to create enigo: {}", e))
            })?;

            Self::press_chord(&mut enigo)
        })
        .await
        .map_err(|e| CopyTriggerError::TriggerFailed(format!("Task join error: {}", e)))?
    }
}
