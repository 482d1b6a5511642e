//! OpenWeatherMap current-weather client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument, warn};

use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::models::WeatherSnapshot;
use crate::{AgriAdvisorError, Result};

/// HTTP client for `GET {base_url}/weather`
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("AgriAdvisor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_conditions(&self, place: &str) -> Result<WeatherSnapshot> {
        info!("Fetching weather data for: {}", place);
        let start_time = Instant::now();

        let url = format!("{}/weather", self.base_url);
        debug!("OpenWeatherMap request URL: {}", url);

        let mut query = vec![("q", place), ("units", "metric")];
        if let Some(key) = &self.api_key {
            query.push(("appid", key.as_str()));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            warn!("Weather provider does not know '{}': {}", place, body);
            return Err(AgriAdvisorError::not_found(format!(
                "No weather data for '{place}'"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Weather provider returned {}: {}", status, body);
            return Err(AgriAdvisorError::UpstreamStatus {
                service: "weather",
                status: status.as_u16(),
            });
        }

        let payload: owm::CurrentWeatherResponse = response.json().await?;
        let snapshot = WeatherSnapshot::try_from(payload)?;

        info!(
            "Weather data fetched in {:.3}s: {}, {}",
            start_time.elapsed().as_secs_f64(),
            snapshot.description,
            snapshot.format_temperature()
        );

        Ok(snapshot)
    }
}

/// OpenWeatherMap response structures and conversion
mod owm {
    use serde::Deserialize;

    use crate::AgriAdvisorError;
    use crate::models::WeatherSnapshot;

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub weather: Vec<Condition>,
        pub main: MainMetrics,
        pub wind: Wind,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainMetrics {
        pub temp: f64,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    impl TryFrom<CurrentWeatherResponse> for WeatherSnapshot {
        type Error = AgriAdvisorError;

        fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
            let condition = response
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| AgriAdvisorError::api("Weather response has no conditions"))?;

            Ok(WeatherSnapshot {
                description: condition.description,
                temperature_celsius: response.main.temp,
                humidity_percent: response.main.humidity,
                wind_speed_meters_per_second: response.wind.speed,
            })
        }
    }
}
