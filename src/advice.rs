//! Weather advice orchestration
//!
//! Chains the two upstream calls of the advice flow: current weather for a place,
//! then a model prompted with that weather. Either the whole model output is
//! returned or an error is, never a mix of the two.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::AgriAdvisorConfig;
use crate::llm::{AdviceGenerator, GeminiClient, build_advice_prompt};
use crate::models::AdviceResponse;
use crate::weather::{OpenWeatherClient, WeatherProvider};
use crate::{AgriAdvisorError, Result};

/// Number of bullets the prompt asks for
pub const EXPECTED_BULLETS: usize = 5;

pub struct AdviceService {
    weather: Arc<dyn WeatherProvider>,
    generator: Arc<dyn AdviceGenerator>,
    enforce_bullet_count: bool,
}

impl AdviceService {
    pub fn new(weather: Arc<dyn WeatherProvider>, generator: Arc<dyn AdviceGenerator>) -> Self {
        Self {
            weather,
            generator,
            enforce_bullet_count: false,
        }
    }

    /// Reject advice that does not carry exactly [`EXPECTED_BULLETS`] details
    #[must_use]
    pub fn with_bullet_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_bullet_count = enforce;
        self
    }

    /// Wire the production OpenWeatherMap and Gemini clients from configuration
    pub fn from_config(config: &AgriAdvisorConfig) -> Result<Self> {
        let weather = OpenWeatherClient::new(&config.weather)?;
        let generator = GeminiClient::new(&config.llm)?;
        Ok(Self::new(Arc::new(weather), Arc::new(generator))
            .with_bullet_enforcement(config.llm.enforce_bullet_count))
    }

    /// Produce farming advice for `place` from its current weather.
    ///
    /// An empty place fails with a validation error before any upstream call.
    #[instrument(skip(self))]
    pub async fn get_weather_advice(&self, place: &str) -> Result<AdviceResponse> {
        if place.is_empty() {
            return Err(AgriAdvisorError::validation("place is required"));
        }

        let weather = self.weather.current_conditions(place).await?;
        info!("Weather data fetched successfully. Now generating advice with LLM.");

        let prompt = build_advice_prompt(place, &weather);
        let text = self.generator.generate_json(&prompt).await?;

        let advice: AdviceResponse = serde_json::from_str(&text)?;
        self.check_bullets(&advice)?;

        Ok(advice)
    }

    fn check_bullets(&self, advice: &AdviceResponse) -> Result<()> {
        if advice.details.len() == EXPECTED_BULLETS {
            return Ok(());
        }
        if self.enforce_bullet_count {
            return Err(AgriAdvisorError::generation(format!(
                "Expected {EXPECTED_BULLETS} advice bullets, got {}",
                advice.details.len()
            )));
        }
        warn!(
            "Model returned {} advice bullets instead of {}",
            advice.details.len(),
            EXPECTED_BULLETS
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherSnapshot;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeWeather {
        calls: AtomicUsize,
        outcome: fn() -> Result<WeatherSnapshot>,
    }

    #[async_trait]
    impl WeatherProvider for FakeWeather {
        async fn current_conditions(&self, _place: &str) -> Result<WeatherSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    struct FakeGenerator {
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        outcome: Result<String>,
    }

    #[async_trait]
    impl AdviceGenerator for FakeGenerator {
        async fn generate_json(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(AgriAdvisorError::generation("no candidates")),
            }
        }
    }

    fn guntur() -> Result<WeatherSnapshot> {
        Ok(WeatherSnapshot {
            description: "clear sky".to_string(),
            temperature_celsius: 32.0,
            humidity_percent: 40.0,
            wind_speed_meters_per_second: 3.0,
        })
    }

    fn unknown_place() -> Result<WeatherSnapshot> {
        Err(AgriAdvisorError::not_found("city not found"))
    }

    fn weather_down() -> Result<WeatherSnapshot> {
        Err(AgriAdvisorError::UpstreamStatus {
            service: "weather",
            status: 500,
        })
    }

    const ADVICE_JSON: &str = r#"{
        "title": "Sunny Skies in Guntur",
        "summary": "Hot and dry today.",
        "details": ["☀️ 32°C", "🌤️ No rain", "🌾 Harvest chillies", "💧 Increase irrigation", "🧑‍🌾 Focus on weeding"]
    }"#;

    fn service(
        weather: fn() -> Result<WeatherSnapshot>,
        generated: Result<String>,
    ) -> (AdviceService, Arc<FakeWeather>, Arc<FakeGenerator>) {
        let weather = Arc::new(FakeWeather {
            calls: AtomicUsize::new(0),
            outcome: weather,
        });
        let generator = Arc::new(FakeGenerator {
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            outcome: generated,
        });
        let service = AdviceService::new(weather.clone(), generator.clone());
        (service, weather, generator)
    }

    #[tokio::test]
    async fn test_empty_place_makes_no_upstream_calls() {
        let (service, weather, generator) = service(guntur, Ok(ADVICE_JSON.to_string()));

        let err = service.get_weather_advice("").await.unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_advice_passes_through_unchanged() {
        let (service, weather, generator) = service(guntur, Ok(ADVICE_JSON.to_string()));

        let advice = service.get_weather_advice("Guntur").await.unwrap();

        let expected: AdviceResponse = serde_json::from_str(ADVICE_JSON).unwrap();
        assert_eq!(advice, expected);
        assert_eq!(weather.calls.load(Ordering::SeqCst), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Location: Guntur"));
        assert!(prompt.contains("Weather Conditions: clear sky"));
    }

    #[tokio::test]
    async fn test_unknown_place_skips_generation() {
        let (service, _, generator) = service(unknown_place, Ok(ADVICE_JSON.to_string()));

        let err = service.get_weather_advice("Atlantis").await.unwrap_err();

        assert!(matches!(err, AgriAdvisorError::NotFound { .. }));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_failure_is_generic() {
        let (service, _, generator) = service(weather_down, Ok(ADVICE_JSON.to_string()));

        let err = service.get_weather_advice("Guntur").await.unwrap_err();

        assert_eq!(err.user_message(), crate::error::GENERIC_FAILURE_SUMMARY);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[case("this is not json")]
    #[case("{\"title\": \"only a title\"}")]
    #[case("[]")]
    #[tokio::test]
    async fn test_malformed_generated_text(#[case] text: &str) {
        let (service, _, _) = service(guntur, Ok(text.to_string()));

        let err = service.get_weather_advice("Guntur").await.unwrap_err();

        assert!(matches!(err, AgriAdvisorError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_missing_generated_text() {
        let (service, _, _) = service(guntur, Err(AgriAdvisorError::generation("empty")));

        let err = service.get_weather_advice("Guntur").await.unwrap_err();

        assert!(matches!(err, AgriAdvisorError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_bullet_count_is_lenient_by_default() {
        let short = r#"{"title": "t", "summary": "s", "details": ["only one"]}"#;
        let (service, _, _) = service(guntur, Ok(short.to_string()));

        let advice = service.get_weather_advice("Guntur").await.unwrap();
        assert_eq!(advice.details.len(), 1);
    }

    #[tokio::test]
    async fn test_bullet_count_enforced_when_enabled() {
        let short = r#"{"title": "t", "summary": "s", "details": ["only one"]}"#;
        let (service, _, _) = service(guntur, Ok(short.to_string()));
        let service = service.with_bullet_enforcement(true);

        let err = service.get_weather_advice("Guntur").await.unwrap_err();
        assert!(matches!(err, AgriAdvisorError::Generation { .. }));
    }
}
