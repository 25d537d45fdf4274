mod ambulance_dto;
mod common;

pub use ambulance_dto::{
    AmbulanceResponse, Coordinates, NearbyAmbulanceResponse, NearbyQueryParams, NearbyResponse,
    NearbyStatus, RegisterAmbulanceRequest,
};
pub use common::ErrorResponse;
