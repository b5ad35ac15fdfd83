//! AltScribe - AI-generated alt text from the clipboard
//!
//! This crate copies whatever is highlighted, asks an OpenAI-compatible
//! vision model for a one to two sentence description and writes that
//! description back to the clipboard.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipboard content, image encoding, prompts and configuration
//! - **Application**: The alt text use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, enigo, OpenAI, etc.)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
