mod ambulance_repository;
mod traits;

pub use ambulance_repository::AmbulanceRepositoryImpl;
pub use traits::AmbulanceRepository;
