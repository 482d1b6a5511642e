//! Generative-language model abstraction
//!
//! Advice generation needs one thing from a model: given a prompt, return the raw
//! generated text, constrained to JSON. Parsing that text is left to the caller.

use async_trait::async_trait;

use crate::Result;

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::build_advice_prompt;

/// Model that turns a prompt into JSON text
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    /// Submit `prompt` and return the first generated text part.
    ///
    /// Missing or empty output is a [`crate::AgriAdvisorError::Generation`] error.
    async fn generate_json(&self, prompt: &str) -> Result<String>;
}
