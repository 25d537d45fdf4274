use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{AmbulanceResponse, RegisterAmbulanceRequest};
use crate::domain::NewAmbulance;
use crate::error::{AppError, AppResult};
use crate::infrastructure::geolocation::LocationProvider;
use crate::infrastructure::repositories::AmbulanceRepository;

/// Orchestrates registration: take the submitted location or resolve the
/// caller's current one, then append the record to the directory. A single
/// uncoordinated insert, no retry on failure.
#[derive(Clone)]
pub struct RegistrarService {
    ambulance_repo: Arc<dyn AmbulanceRepository>,
    location_provider: Arc<dyn LocationProvider>,
}

impl RegistrarService {
    pub fn new(
        ambulance_repo: Arc<dyn AmbulanceRepository>,
        location_provider: Arc<dyn LocationProvider>,
    ) -> Self {
        Self {
            ambulance_repo,
            location_provider,
        }
    }

    pub async fn register(
        &self,
        request: RegisterAmbulanceRequest,
        client_ip: &str,
    ) -> AppResult<AmbulanceResponse> {
        request.validate()?;

        let location = match request.location {
            Some(coordinates) => coordinates.into(),
            None => self
                .location_provider
                .current_position(client_ip)
                .await
                .map_err(|error| AppError::location_unavailable(error.to_string()))?,
        };

        let submission = NewAmbulance {
            name: request.name,
            contact: request.contact,
            location,
        };

        let created = self.ambulance_repo.create(&submission).await?;
        info!(
            ambulance_id = %created.id,
            latitude = created.location.latitude,
            longitude = created.location.longitude,
            "ambulance registered"
        );

        Ok(created.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<AmbulanceResponse> {
        let ambulance = self
            .ambulance_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("ambulance not found".to_string()))?;

        Ok(ambulance.into())
    }
}
