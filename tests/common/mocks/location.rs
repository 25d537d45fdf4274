use async_trait::async_trait;

use ambufind_backend::domain::GeoPoint;
use ambufind_backend::infrastructure::geolocation::{LocationError, LocationProvider};

/// Location provider returning either a fixed position or a failure.
pub struct MockLocationProvider {
    position: Option<GeoPoint>,
}

impl MockLocationProvider {
    pub fn fixed(position: GeoPoint) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn failing() -> Self {
        Self { position: None }
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_position(&self, _client_ip: &str) -> Result<GeoPoint, LocationError> {
        self.position
            .ok_or_else(|| LocationError::Lookup("mock lookup failure".to_string()))
    }
}
