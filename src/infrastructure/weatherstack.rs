//! Weatherstack client - current weather conditions

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::{WeatherLookupError, WeatherPort};
use crate::domain::value_objects::WeatherReading;

/// Bounded budget for the single outbound call; no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Weatherstack current-conditions API
#[derive(Clone)]
pub struct WeatherstackClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl WeatherstackClient {
    pub fn new(base_url: &str, access_key: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        }
    }

    /// Normalize a Weatherstack response body into a reading
    ///
    /// Weatherstack reports request-level errors inside a 200 body, so the
    /// error field is checked before the payload shape is rejected.
    fn parse_body(body: WeatherstackResponse) -> Result<WeatherReading, WeatherLookupError> {
        if let Some(current) = body.current {
            let conditions = current
                .weather_descriptions
                .into_iter()
                .next()
                .ok_or_else(|| {
                    WeatherLookupError::Malformed("empty weather_descriptions".to_string())
                })?;
            return Ok(WeatherReading {
                temperature: current.temperature,
                conditions,
                precipitation: current.precip,
            });
        }

        if let Some(error) = body.error {
            let info = error.info.unwrap_or_else(|| "unknown error".to_string());
            return Err(WeatherLookupError::Provider(info));
        }

        Err(WeatherLookupError::Malformed(
            "response has neither \"current\" nor \"error\"".to_string(),
        ))
    }
}

#[async_trait]
impl WeatherPort for WeatherstackClient {
    async fn current(&self, location: &str) -> Result<WeatherReading, WeatherLookupError> {
        let response = self
            .client
            .get(format!("{}/current", self.base_url))
            .query(&[("access_key", self.access_key.as_str()), ("query", location)])
            .send()
            .await
            .map_err(|e| WeatherLookupError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherLookupError::Provider(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body: WeatherstackResponse = response
            .json()
            .await
            .map_err(|e| WeatherLookupError::Malformed(e.to_string()))?;

        Self::parse_body(body)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherstackResponse {
    current: Option<CurrentConditions>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature: f64,
    weather_descriptions: Vec<String>,
    precip: f64,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<WeatherReading, WeatherLookupError> {
        WeatherstackClient::parse_body(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parses_a_current_conditions_body() {
        let reading = parse(
            r#"{"current": {"temperature": 18, "weather_descriptions": ["Sunny"], "precip": 0}}"#,
        )
        .unwrap();

        assert_eq!(reading.temperature, 18.0);
        assert_eq!(reading.conditions, "Sunny");
        assert_eq!(reading.precipitation, 0.0);
    }

    #[test]
    fn only_the_first_description_is_used() {
        let reading = parse(
            r#"{"current": {"temperature": 4.5, "weather_descriptions": ["Overcast", "Mist"], "precip": 1.2}}"#,
        )
        .unwrap();

        assert_eq!(reading.conditions, "Overcast");
    }

    #[test]
    fn provider_error_body_maps_to_provider_error() {
        let err = parse(r#"{"error": {"info": "Your monthly usage limit has been reached."}}"#)
            .unwrap_err();

        assert!(matches!(err, WeatherLookupError::Provider(_)));
        assert!(err.to_string().contains("monthly usage limit"));
    }

    #[test]
    fn empty_descriptions_are_malformed() {
        let err =
            parse(r#"{"current": {"temperature": 18, "weather_descriptions": [], "precip": 0}}"#)
                .unwrap_err();
        assert!(matches!(err, WeatherLookupError::Malformed(_)));
    }

    #[test]
    fn body_without_current_or_error_is_malformed() {
        let err = parse(r#"{"request": {"query": "Paris"}}"#).unwrap_err();
        assert!(matches!(err, WeatherLookupError::Malformed(_)));
    }

    #[tokio::test]
    async fn transport_fault_surfaces_as_a_transport_error() {
        // Port 9 (discard) is unroutable for HTTP; the request fails at the
        // connection stage, which is the path callers see on timeouts too.
        let client = WeatherstackClient::new("http://127.0.0.1:9", "key");
        let err = client.current("Paris").await.unwrap_err();
        assert!(matches!(err, WeatherLookupError::Transport(_)));
    }
}
