#[allow(dead_code, unused_imports)]
pub mod ambulance_repo;
#[allow(dead_code, unused_imports)]
pub mod location;
#[allow(dead_code, unused_imports)]
pub mod utils;

pub use ambulance_repo::MockAmbulanceRepo;
pub use location::MockLocationProvider;
