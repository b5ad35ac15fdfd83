//! Description domain module

mod prompt;
mod request;

pub use prompt::DescriptionPrompt;
pub use request::DescriptionRequest;
