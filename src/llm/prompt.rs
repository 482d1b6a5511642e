//! Farming advice prompt

use crate::models::WeatherSnapshot;

/// Build the prompt asking the model for advice on `place` given its current weather.
///
/// The prompt spells out the exact JSON shape expected back: `title`, `summary`
/// and five `details` bullets.
#[must_use]
pub fn build_advice_prompt(place: &str, weather: &WeatherSnapshot) -> String {
    let temperature = weather.format_temperature();

    format!(
        r#"Act as an expert agricultural advisor for an Indian farmer. Based on the following weather data, provide specific, practical advice for farming activities.

Location: {place}
Weather Conditions: {description}
Temperature: {temperature}
Humidity: {humidity}
Wind Speed: {wind}

Your response should be a JSON object with the following structure:
{{
  "title": "A concise, engaging title for the weather advice.",
  "summary": "A brief, friendly summary of the current weather situation and its general impact on farming.",
  "details": [
    "An actionable bullet point about the current weather conditions, including emojis and temperature in Celsius. For example, '☀️ Today is mostly sunny with a high of {temperature}, so remember to hydrate and protect your crops from the heat.'",
    "An actionable bullet point about timing, specifically mentioning if it's a good time for rain or sun. For example, '🌧️ Expect light rain in the afternoon. This is good for planting new seedlings.'",
    "An actionable bullet point about crops, suggesting what to do and what crops are best to plant or harvest now based on the weather.",
    "An actionable bullet point about irrigation (e.g., 'Increase irrigation').",
    "An actionable bullet point about other farming tasks (e.g., 'Focus on weeding')."
  ]
}}

Ensure the advice is relevant to the provided weather metrics. The content should be clear, helpful, and use simple language. Use emojis in the bullet points to make them visually appealing."#,
        description = weather.description,
        humidity = weather.format_humidity(),
        wind = weather.format_wind(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guntur_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            description: "clear sky".to_string(),
            temperature_celsius: 32.0,
            humidity_percent: 40.0,
            wind_speed_meters_per_second: 3.0,
        }
    }

    #[test]
    fn test_prompt_embeds_weather_and_place() {
        let prompt = build_advice_prompt("Guntur", &guntur_weather());

        assert!(prompt.contains("Location: Guntur"));
        assert!(prompt.contains("Weather Conditions: clear sky"));
        assert!(prompt.contains("Temperature: 32°C"));
        assert!(prompt.contains("Humidity: 40%"));
        assert!(prompt.contains("Wind Speed: 3 m/s"));
        assert!(prompt.contains("with a high of 32°C"));
    }

    #[test]
    fn test_prompt_describes_json_shape() {
        let prompt = build_advice_prompt("Guntur", &guntur_weather());

        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"details\": ["));
        assert_eq!(prompt.matches("An actionable bullet point").count(), 5);
        assert!(!prompt.contains("{{"));
    }
}
