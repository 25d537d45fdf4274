use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::errors::DomainError;

/// Earth mean radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude coordinate pair in decimal degrees.
///
/// Invariant: latitude in [-90, 90], longitude in [-180, 180]. The
/// constructor enforces it; `distance_km` assumes it and propagates NaN for
/// NaN input rather than checking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let point = Self {
            latitude,
            longitude,
        };
        if !point.is_valid() {
            return Err(DomainError::ValidationError(format!(
                "coordinates out of range: ({latitude}, {longitude})"
            )));
        }
        Ok(point)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Great-circle distance between two points in kilometers (haversine).
///
/// Symmetric, zero for identical points, monotonic with angular separation.
/// NaN in either input yields NaN.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
