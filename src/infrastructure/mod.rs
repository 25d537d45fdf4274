pub mod db;
pub mod geolocation;
pub mod repositories;
