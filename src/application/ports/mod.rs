//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod copy_trigger;
pub mod describer;
pub mod notifier;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardReader, ClipboardWriter};
pub use config::ConfigStore;
pub use copy_trigger::{CopyTrigger, CopyTriggerError};
pub use describer::{Describer, DescriptionError};
pub use notifier::{NotificationError, Notice, NoticeLevel, Notifier};
