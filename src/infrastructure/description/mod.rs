//! Description service adapters

mod openai;

pub use openai::OpenAiDescriber;
