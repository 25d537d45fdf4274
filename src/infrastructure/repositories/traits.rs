use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Ambulance, NewAmbulance};
use crate::error::AppResult;

/// The ambulance directory store. Records are append-only: there are no
/// update or delete operations.
#[async_trait]
pub trait AmbulanceRepository: Send + Sync {
    /// Returns every registered ambulance. The directory is small enough
    /// that the finder fetches it whole, matching the one-shot fetch the
    /// frontend performs per session.
    async fn find_all(&self) -> AppResult<Vec<Ambulance>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ambulance>>;

    /// Inserts a new record and returns it with the store-assigned id.
    async fn create(&self, ambulance: &NewAmbulance) -> AppResult<Ambulance>;
}
