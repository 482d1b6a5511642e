//! `AgriAdvisor` - Farming gateway with weather-driven crop advice
//!
//! This library provides the HTTP API serving static agricultural reference
//! data and the advice flow that turns live weather into structured farming
//! guidance through a generative model.

pub mod advice;
pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod models;
pub mod reference;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advice::AdviceService;
pub use api::AppState;
pub use config::AgriAdvisorConfig;
pub use error::AgriAdvisorError;
pub use llm::{AdviceGenerator, GeminiClient};
pub use models::{AdviceResponse, ErrorAdvice, WeatherSnapshot};
pub use weather::{OpenWeatherClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AgriAdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
