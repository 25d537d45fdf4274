use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::config::GeolocationConfig;
use crate::domain::GeoPoint;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("geolocation is disabled")]
    Disabled,

    #[error("geolocation request timed out")]
    Timeout,

    #[error("geolocation lookup failed: {0}")]
    Lookup(String),
}

/// Supplies the caller's current coordinates. One-shot: there is no
/// cancellation, an abandoned request simply discards the result.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self, client_ip: &str) -> Result<GeoPoint, LocationError>;
}

/// Used when no geolocation endpoint is configured. Requests that need a
/// resolved position fail with `LocationError::Disabled`.
pub struct DisabledLocationProvider;

#[async_trait]
impl LocationProvider for DisabledLocationProvider {
    async fn current_position(&self, _client_ip: &str) -> Result<GeoPoint, LocationError> {
        Err(LocationError::Disabled)
    }
}

/// Resolves a client IP to coordinates against an external ip-api style
/// endpoint. The last successful fix per client is cached with a TTL and
/// returned as fallback when a fresh lookup fails.
pub struct HttpLocationProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
    last_known: Cache<String, GeoPoint>,
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl HttpLocationProvider {
    pub fn new(config: &GeolocationConfig) -> Self {
        let last_known = Cache::builder()
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .max_capacity(config.cache_capacity)
            .build();

        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
            last_known,
        }
    }

    async fn lookup(&self, client_ip: &str) -> Result<GeoPoint, LocationError> {
        let url = format!("{}/{}?fields=status,message,lat,lon", self.endpoint, client_ip);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationError::Timeout
                } else {
                    LocationError::Lookup(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(LocationError::Lookup(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Lookup(format!("malformed provider response: {e}")))?;

        if body.status != "success" {
            return Err(LocationError::Lookup(
                body.message
                    .unwrap_or_else(|| "provider reported failure".to_string()),
            ));
        }

        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => GeoPoint::new(latitude, longitude)
                .map_err(|e| LocationError::Lookup(e.to_string())),
            _ => Err(LocationError::Lookup(
                "provider response missing coordinates".to_string(),
            )),
        }
    }
}

#[async_trait]
impl LocationProvider for HttpLocationProvider {
    async fn current_position(&self, client_ip: &str) -> Result<GeoPoint, LocationError> {
        match self.lookup(client_ip).await {
            Ok(position) => {
                self.last_known
                    .insert(client_ip.to_string(), position)
                    .await;
                Ok(position)
            }
            Err(error) => {
                if let Some(cached) = self.last_known.get(client_ip).await {
                    warn!(
                        client_ip = %client_ip,
                        error = %error,
                        "geolocation lookup failed, falling back to last known position"
                    );
                    return Ok(cached);
                }
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeolocationConfig;

    #[tokio::test]
    async fn disabled_provider_always_fails() {
        let provider = DisabledLocationProvider;

        let result = provider.current_position("203.0.113.7").await;

        assert_eq!(result, Err(LocationError::Disabled));
    }

    #[tokio::test]
    async fn http_provider_fails_without_cached_position() {
        // Unroutable endpoint, nothing cached yet.
        let config = GeolocationConfig {
            enabled: true,
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 1,
            cache_ttl_seconds: 60,
            cache_capacity: 16,
        };
        let provider = HttpLocationProvider::new(&config);

        let result = provider.current_position("203.0.113.7").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn http_provider_falls_back_to_last_known_position() {
        let config = GeolocationConfig {
            enabled: true,
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 1,
            cache_ttl_seconds: 60,
            cache_capacity: 16,
        };
        let provider = HttpLocationProvider::new(&config);
        let cached = GeoPoint {
            latitude: 19.1,
            longitude: 72.9,
        };
        provider
            .last_known
            .insert("203.0.113.7".to_string(), cached)
            .await;

        let result = provider.current_position("203.0.113.7").await;

        assert_eq!(result, Ok(cached));
    }

    #[test]
    fn lookup_response_parses_failure_payload() {
        let body: IpLookupResponse =
            serde_json::from_str(r#"{"status":"fail","message":"private range"}"#)
                .expect("payload should deserialize");

        assert_eq!(body.status, "fail");
        assert_eq!(body.message.as_deref(), Some("private range"));
        assert!(body.lat.is_none());
    }

    #[test]
    fn lookup_response_parses_success_payload() {
        let body: IpLookupResponse =
            serde_json::from_str(r#"{"status":"success","lat":19.076,"lon":72.8777}"#)
                .expect("payload should deserialize");

        assert_eq!(body.status, "success");
        assert_eq!(body.lat, Some(19.076));
        assert_eq!(body.lon, Some(72.8777));
    }
}
