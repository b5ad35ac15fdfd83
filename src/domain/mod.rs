//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod content;
pub mod description;
pub mod error;

// Re-export common types
pub use config::AppConfig;
pub use content::{ClipboardContent, ContentKind, ImageBitmap};
pub use description::{DescriptionPrompt, DescriptionRequest};
pub use error::*;
