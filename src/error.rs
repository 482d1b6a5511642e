//! Error types and handling for the `AgriAdvisor` gateway

use thiserror::Error;

/// Summary returned when the weather provider does not know the location
pub const NOT_FOUND_SUMMARY: &str =
    "Could not find weather data for the location. Please check the spelling and try again.";

/// Summary returned for every other advice failure
pub const GENERIC_FAILURE_SUMMARY: &str =
    "Failed to get weather advice. Please try again with a valid location.";

/// Summary returned when the request carries no place
pub const MISSING_PLACE_SUMMARY: &str = "Please provide a location to get weather advice.";

/// Main error type for the `AgriAdvisor` gateway
#[derive(Error, Debug)]
pub enum AgriAdvisorError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The weather provider does not know the requested location
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Upstream answered with an unusable payload
    #[error("API error: {message}")]
    Api { message: String },

    /// Upstream answered with a non-success status
    #[error("{service} responded with status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    /// The model produced no usable advice
    #[error("Generation error: {message}")]
    Generation { message: String },

    /// Transport, timeout or body decoding failures
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Generated text was not valid advice JSON
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl AgriAdvisorError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Errors caused by the caller rather than by an upstream dependency
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, AgriAdvisorError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AgriAdvisorError::Validation { .. } => MISSING_PLACE_SUMMARY.to_string(),
            AgriAdvisorError::NotFound { .. } => NOT_FOUND_SUMMARY.to_string(),
            AgriAdvisorError::Config { .. }
            | AgriAdvisorError::Api { .. }
            | AgriAdvisorError::UpstreamStatus { .. }
            | AgriAdvisorError::Generation { .. }
            | AgriAdvisorError::Http { .. }
            | AgriAdvisorError::Parse { .. } => GENERIC_FAILURE_SUMMARY.to_string(),
        }
    }
}
