mod client;
mod prompt;
mod types;

pub use client::{HuggingFaceClient, TutorClient};
pub use prompt::build_prompt;
pub use types::{GeneratedText, GenerationRequest, parse_generated_text};
