//! Advice request and response payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AgriAdvisorError, MISSING_PLACE_SUMMARY};

/// Fixed title of every failure payload
pub const ERROR_TITLE: &str = "Error ⚠️";

/// Body of `POST /api/weather-advice`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub place: Option<String>,
}

impl AdviceRequest {
    /// The requested place, if one was given. Empty strings count as missing.
    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref().filter(|place| !place.is_empty())
    }
}

/// Structured advice produced by the model and returned to clients unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub title: String,
    pub summary: String,
    /// Bullet points, five when the model follows the prompt
    pub details: Vec<String>,
    /// Any other keys the model produced, returned as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Failure payload synthesized locally when any advice step fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorAdvice {
    pub title: String,
    pub summary: String,
    /// Always empty
    pub details: Vec<String>,
}

impl ErrorAdvice {
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            summary: summary.into(),
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_error(error: &AgriAdvisorError) -> Self {
        Self::new(error.user_message())
    }
}

/// Payload of the missing-place rejection. Carries no title or details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationMessage {
    pub summary: String,
}

impl Default for ValidationMessage {
    fn default() -> Self {
        Self {
            summary: MISSING_PLACE_SUMMARY.to_string(),
        }
    }
}

/// `{ "message": ... }` wrapper shared by the JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEnvelope<T> {
    pub message: T,
}

impl<T> MessageEnvelope<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GENERIC_FAILURE_SUMMARY, NOT_FOUND_SUMMARY};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({}), None)]
    #[case(json!({"place": null}), None)]
    #[case(json!({"place": ""}), None)]
    #[case(json!({"place": "Guntur"}), Some("Guntur"))]
    #[case(json!({"place": "  "}), Some("  "))]
    fn test_place_presence(#[case] body: serde_json::Value, #[case] expected: Option<&str>) {
        let request: AdviceRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.place(), expected);
    }

    #[test]
    fn test_error_advice_shape() {
        let advice = ErrorAdvice::from_error(&AgriAdvisorError::not_found("Atlantis"));
        assert_eq!(
            serde_json::to_value(&advice).unwrap(),
            json!({"title": "Error ⚠️", "summary": NOT_FOUND_SUMMARY, "details": []})
        );

        let advice = ErrorAdvice::from_error(&AgriAdvisorError::generation("empty"));
        assert_eq!(advice.summary, GENERIC_FAILURE_SUMMARY);
    }

    #[test]
    fn test_validation_message_has_only_summary() {
        let envelope = MessageEnvelope::new(ValidationMessage::default());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"message": {"summary": "Please provide a location to get weather advice."}})
        );
    }

    #[test]
    fn test_advice_response_keeps_extra_keys() {
        let generated = json!({
            "title": "Sunny",
            "summary": "Hot day",
            "details": ["a", "b"],
            "confidence": 0.9,
            "sources": {"weather": "openweathermap"}
        });
        let advice: AdviceResponse = serde_json::from_value(generated.clone()).unwrap();

        assert_eq!(advice.details, vec!["a", "b"]);
        assert_eq!(advice.extra["confidence"], json!(0.9));
        assert_eq!(serde_json::to_value(&advice).unwrap(), generated);
    }
}
