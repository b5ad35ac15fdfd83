//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or wl-clipboard on Wayland as an alternative.

mod arboard;
mod wayland;

use std::fmt;
use std::str::FromStr;

pub use self::arboard::ArboardClipboard;
pub use self::wayland::WaylandClipboard;

use crate::application::ports::{ClipboardReader, ClipboardWriter};

/// Available clipboard backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    /// Cross-platform arboard library
    #[default]
    Arboard,
    /// wl-paste / wl-copy command line tools
    Wayland,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBackend::Arboard => write!(f, "arboard"),
            ClipboardBackend::Wayland => write!(f, "wayland"),
        }
    }
}

/// Valid clipboard backend names
pub const VALID_CLIPBOARD_BACKENDS: &[&str] = &["arboard", "wayland"];

impl FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arboard" => Ok(ClipboardBackend::Arboard),
            "wayland" => Ok(ClipboardBackend::Wayland),
            _ => Err(format!(
                "invalid clipboard backend '{}'. Valid options: {}",
                s,
                VALID_CLIPBOARD_BACKENDS.join(", ")
            )),
        }
    }
}

/// Create the reader/writer pair for a backend
pub fn create_clipboard(
    backend: ClipboardBackend,
) -> (Box<dyn ClipboardReader>, Box<dyn ClipboardWriter>) {
    match backend {
        ClipboardBackend::Arboard => (
            Box::new(ArboardClipboard::new()),
            Box::new(ArboardClipboard::new()),
        ),
        ClipboardBackend::Wayland => (
            Box::new(WaylandClipboard::new()),
            Box::new(WaylandClipboard::new()),
        ),
    }
}
