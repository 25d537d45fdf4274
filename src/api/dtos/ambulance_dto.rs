use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Ambulance, GeoPoint, RankedAmbulance};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

impl From<GeoPoint> for Coordinates {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

impl From<Coordinates> for GeoPoint {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Registration payload. Name and contact are stored as submitted, with no
/// content validation; location falls back to the caller's resolved position
/// when omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterAmbulanceRequest {
    pub name: String,
    pub contact: String,
    #[validate(nested)]
    pub location: Option<Coordinates>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct NearbyQueryParams {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: Option<f64>,

    pub radius_km: Option<f64>,
}

impl NearbyQueryParams {
    /// Latitude and longitude are only meaningful as a pair.
    pub fn origin(&self) -> Result<Option<GeoPoint>, &'static str> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(GeoPoint {
                latitude,
                longitude,
            })),
            (None, None) => Ok(None),
            _ => Err("latitude and longitude must be provided together"),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AmbulanceResponse {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub location: Coordinates,
    pub created_at: DateTime<Utc>,
}

impl From<Ambulance> for AmbulanceResponse {
    fn from(ambulance: Ambulance) -> Self {
        Self {
            id: ambulance.id,
            name: ambulance.name,
            contact: ambulance.contact,
            location: ambulance.location.into(),
            created_at: ambulance.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NearbyAmbulanceResponse {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub location: Coordinates,
    pub distance_km: f64,
}

impl From<RankedAmbulance> for NearbyAmbulanceResponse {
    fn from(ranked: RankedAmbulance) -> Self {
        Self {
            id: ranked.ambulance.id,
            name: ranked.ambulance.name,
            contact: ranked.ambulance.contact,
            location: ranked.ambulance.location.into(),
            distance_km: ranked.distance_km,
        }
    }
}

/// Outcome of a nearby query. A failed location fix or directory read
/// degrades to an empty list with the corresponding status instead of an
/// HTTP error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NearbyStatus {
    Ok,
    LocationUnavailable,
    DirectoryUnavailable,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NearbyResponse {
    pub status: NearbyStatus,
    pub origin: Option<Coordinates>,
    pub radius_km: f64,
    pub ambulances: Vec<NearbyAmbulanceResponse>,
}

impl NearbyResponse {
    pub fn degraded(status: NearbyStatus, origin: Option<GeoPoint>, radius_km: f64) -> Self {
        Self {
            status,
            origin: origin.map(Coordinates::from),
            radius_km,
            ambulances: Vec::new(),
        }
    }
}
