//! Current weather snapshot handed from the weather provider to the prompt builder

use serde::{Deserialize, Serialize};

/// Current conditions for a place, in metric units
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Human-readable description of weather conditions
    pub description: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity in percent
    pub humidity_percent: f64,
    /// Wind speed in m/s
    pub wind_speed_meters_per_second: f64,
}

impl WeatherSnapshot {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} m/s", self.wind_speed_meters_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            description: "clear sky".to_string(),
            temperature_celsius: 32.0,
            humidity_percent: 40.0,
            wind_speed_meters_per_second: 3.6,
        }
    }

    #[test]
    fn test_formatting_keeps_provider_precision() {
        let weather = snapshot();
        assert_eq!(weather.format_temperature(), "32°C");
        assert_eq!(weather.format_humidity(), "40%");
        assert_eq!(weather.format_wind(), "3.6 m/s");
    }
}
