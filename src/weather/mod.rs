//! Weather provider abstraction
//!
//! The advice flow only needs the current conditions of a named place, so the
//! provider seam is a single async lookup. `OpenWeatherClient` is the production
//! implementation.

use async_trait::async_trait;

use crate::Result;
use crate::models::WeatherSnapshot;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current conditions for `place` in metric units.
    ///
    /// Unknown places surface as [`crate::AgriAdvisorError::NotFound`].
    async fn current_conditions(&self, place: &str) -> Result<WeatherSnapshot>;
}
