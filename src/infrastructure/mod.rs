//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the OS clipboard,
//! input injection tools and the description API.

pub mod clipboard;
pub mod config;
pub mod copy_trigger;
pub mod description;
pub mod notification;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardBackend, WaylandClipboard};
pub use config::XdgConfigStore;
pub use copy_trigger::{create_copy_trigger, CopyTool, CopyToolPreference, NoOpCopyTrigger};
pub use description::OpenAiDescriber;
pub use notification::{create_notifier, NotifyRustNotifier};
