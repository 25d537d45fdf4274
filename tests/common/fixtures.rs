use chrono::Utc;
use uuid::Uuid;

use ambufind_backend::domain::{Ambulance, GeoPoint};

/// Reference origin used by the proximity tests, in Mumbai.
pub const ORIGIN: GeoPoint = GeoPoint {
    latitude: 19.1,
    longitude: 72.9,
};

pub fn ambulance(name: &str, contact: &str, latitude: f64, longitude: f64) -> Ambulance {
    Ambulance {
        id: Uuid::new_v4(),
        name: name.to_string(),
        contact: contact.to_string(),
        location: GeoPoint {
            latitude,
            longitude,
        },
        created_at: Utc::now(),
    }
}

/// Ten directory entries around [`ORIGIN`]. The `within10` entries sit close
/// to the origin and the `beyond10` entries well outside it, with one
/// exception: contact "4" computes to about 11.35 km and only qualifies once
/// the radius is widened past that.
///
/// Distances from [`ORIGIN`], ascending:
/// contact "1" = 3.25 km, "3" = 4.83 km, "2" = 7.80 km, "0" = 8.82 km,
/// "4" = 11.35 km; every `beyond10` entry is 19 km or further out.
pub fn seeded_directory() -> Vec<Ambulance> {
    vec![
        ambulance("within10", "0", 19.170128, 72.9391392),
        ambulance("within10", "1", 19.090128, 72.9291392),
        ambulance("within10", "2", 19.140128, 72.8391392),
        ambulance("within10", "3", 19.080128, 72.8591392),
        ambulance("within10", "4", 19.200128, 72.8791392),
        ambulance("beyond10", "5", 19.320128, 72.8891392),
        ambulance("beyond10", "6", 18.920128, 72.8891392),
        ambulance("beyond10", "7", 19.120128, 73.0891392),
        ambulance("beyond10", "8", 19.120128, 72.6891392),
        ambulance("beyond10", "9", 19.320128, 73.0891392),
    ]
}
