use std::sync::Arc;

use tracing::warn;

use crate::api::dtos::{AmbulanceResponse, NearbyResponse, NearbyStatus};
use crate::config::ProximityConfig;
use crate::domain::{nearby, GeoPoint};
use crate::error::{AppError, AppResult};
use crate::infrastructure::geolocation::{LocationError, LocationProvider};
use crate::infrastructure::repositories::AmbulanceRepository;

/// Orchestrates the nearby view: resolve the caller's position, fetch the
/// full candidate set, and rank candidates within the radius. Failure of
/// either collaborator degrades to an empty result with a visible status
/// rather than an HTTP error.
#[derive(Clone)]
pub struct FinderService {
    ambulance_repo: Arc<dyn AmbulanceRepository>,
    location_provider: Arc<dyn LocationProvider>,
    proximity: ProximityConfig,
}

impl FinderService {
    pub fn new(
        ambulance_repo: Arc<dyn AmbulanceRepository>,
        location_provider: Arc<dyn LocationProvider>,
        proximity: ProximityConfig,
    ) -> Self {
        Self {
            ambulance_repo,
            location_provider,
            proximity,
        }
    }

    pub async fn nearby_ambulances(
        &self,
        origin: Option<GeoPoint>,
        radius_km: Option<f64>,
        client_ip: &str,
    ) -> AppResult<NearbyResponse> {
        let radius_km = self.effective_radius(radius_km)?;

        // The filter only runs once both the position and the candidate set
        // have resolved; neither failure interrupts the other fetch.
        let (origin_result, candidates_result) = tokio::join!(
            self.resolve_origin(origin, client_ip),
            self.ambulance_repo.find_all()
        );

        let origin = match origin_result {
            Ok(origin) => origin,
            Err(error) => {
                warn!(
                    client_ip = %client_ip,
                    error = %error,
                    "location unavailable, returning empty nearby result"
                );
                return Ok(NearbyResponse::degraded(
                    NearbyStatus::LocationUnavailable,
                    None,
                    radius_km,
                ));
            }
        };

        let candidates = match candidates_result {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(
                    error = %error,
                    "ambulance directory unavailable, returning empty nearby result"
                );
                return Ok(NearbyResponse::degraded(
                    NearbyStatus::DirectoryUnavailable,
                    Some(origin),
                    radius_km,
                ));
            }
        };

        let ranked = nearby(origin, candidates, radius_km);

        Ok(NearbyResponse {
            status: NearbyStatus::Ok,
            origin: Some(origin.into()),
            radius_km,
            ambulances: ranked.into_iter().map(Into::into).collect(),
        })
    }

    /// Full directory listing. Unlike the nearby view, a store failure here
    /// surfaces as an error.
    pub async fn list(&self) -> AppResult<Vec<AmbulanceResponse>> {
        let ambulances = self.ambulance_repo.find_all().await?;
        Ok(ambulances.into_iter().map(Into::into).collect())
    }

    async fn resolve_origin(
        &self,
        origin: Option<GeoPoint>,
        client_ip: &str,
    ) -> Result<GeoPoint, LocationError> {
        match origin {
            Some(point) => Ok(point),
            None => self.location_provider.current_position(client_ip).await,
        }
    }

    fn effective_radius(&self, requested: Option<f64>) -> AppResult<f64> {
        let radius = requested.unwrap_or(self.proximity.default_radius_km);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AppError::validation_error(
                "radius_km must be a positive number",
            ));
        }
        if radius > self.proximity.max_radius_km {
            return Err(AppError::validation_error(format!(
                "radius_km must not exceed {}",
                self.proximity.max_radius_km
            )));
        }
        Ok(radius)
    }
}
