pub mod ambulance;
pub mod errors;
pub mod geo;
pub mod proximity;

pub use ambulance::{Ambulance, NewAmbulance, RankedAmbulance};
pub use errors::DomainError;
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use proximity::nearby;
