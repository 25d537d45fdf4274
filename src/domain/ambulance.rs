use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::geo::GeoPoint;

/// A registered ambulance as stored in the directory. Immutable after
/// creation; there are no update or delete operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Ambulance {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    #[sqlx(flatten)]
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
}

/// A registrar submission before the store assigns an id. Name and contact
/// are stored as-is, empty or not.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAmbulance {
    pub name: String,
    pub contact: String,
    pub location: GeoPoint,
}

/// An ambulance paired with its distance from a query origin. Derived per
/// query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAmbulance {
    pub ambulance: Ambulance,
    pub distance_km: f64,
}
