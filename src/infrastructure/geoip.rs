//! GeoIP client - best-effort city resolution from the caller's IP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::GeolocationPort;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the ip-api.com JSON endpoint
#[derive(Clone)]
pub struct GeoIpClient {
    client: Client,
    base_url: String,
    fallback_city: String,
}

impl GeoIpClient {
    pub fn new(base_url: &str, fallback_city: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_city: fallback_city.to_string(),
        }
    }

    async fn try_locate(&self) -> Result<Option<String>, reqwest::Error> {
        let body: GeoIpResponse = self
            .client
            .get(format!("{}/json", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        Ok(Self::usable_city(body))
    }

    /// A city is usable only when present and non-blank
    fn usable_city(body: GeoIpResponse) -> Option<String> {
        body.city.filter(|city| !city.trim().is_empty())
    }
}

#[async_trait]
impl GeolocationPort for GeoIpClient {
    async fn locate(&self) -> String {
        match self.try_locate().await {
            Ok(Some(city)) => city,
            Ok(None) => self.fallback_city.clone(),
            Err(e) => {
                tracing::debug!(error = %e, fallback = %self.fallback_city, "geolocation failed");
                self.fallback_city.clone()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_city_is_not_usable() {
        let missing = GeoIpResponse { city: None };
        assert_eq!(GeoIpClient::usable_city(missing), None);

        let blank = GeoIpResponse {
            city: Some("  ".to_string()),
        };
        assert_eq!(GeoIpClient::usable_city(blank), None);

        let lyon = GeoIpResponse {
            city: Some("Lyon".to_string()),
        };
        assert_eq!(GeoIpClient::usable_city(lyon).as_deref(), Some("Lyon"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_to_the_configured_city() {
        let client = GeoIpClient::new("http://127.0.0.1:9", "Paris");
        assert_eq!(client.locate().await, "Paris");
    }
}
