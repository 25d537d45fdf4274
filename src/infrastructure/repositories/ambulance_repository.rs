use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Ambulance, NewAmbulance};
use crate::error::AppResult;

use super::traits::AmbulanceRepository;

pub struct AmbulanceRepositoryImpl {
    pool: PgPool,
}

impl AmbulanceRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmbulanceRepository for AmbulanceRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Ambulance>> {
        let ambulances = sqlx::query_as::<_, Ambulance>(
            "SELECT id, name, contact, latitude, longitude, created_at \
             FROM ambulances ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ambulances)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ambulance>> {
        let ambulance = sqlx::query_as::<_, Ambulance>(
            "SELECT id, name, contact, latitude, longitude, created_at \
             FROM ambulances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ambulance)
    }

    async fn create(&self, ambulance: &NewAmbulance) -> AppResult<Ambulance> {
        let created = sqlx::query_as::<_, Ambulance>(
            "INSERT INTO ambulances (name, contact, latitude, longitude) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, contact, latitude, longitude, created_at",
        )
        .bind(&ambulance.name)
        .bind(&ambulance.contact)
        .bind(ambulance.location.latitude)
        .bind(ambulance.location.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
