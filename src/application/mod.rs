//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod alt_text;
pub mod ports;

// Re-export use cases
pub use alt_text::{
    AltTextCallbacks, AltTextError, AltTextInput, AltTextOutcome, GenerateAltTextUseCase,
};
