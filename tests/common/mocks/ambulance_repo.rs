use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use ambufind_backend::domain::{Ambulance, NewAmbulance};
use ambufind_backend::error::{AppError, AppResult};
use ambufind_backend::infrastructure::repositories::AmbulanceRepository;

/// In-memory directory store. Failure toggles make it stand in for an
/// unreachable database.
pub struct MockAmbulanceRepo {
    ambulances: Mutex<Vec<Ambulance>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockAmbulanceRepo {
    pub fn new() -> Self {
        Self {
            ambulances: Mutex::new(Vec::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn with_ambulances(ambulances: Vec<Ambulance>) -> Self {
        Self {
            ambulances: Mutex::new(ambulances),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Ambulance> {
        self.ambulances
            .lock()
            .expect("mock state lock should not be poisoned")
            .clone()
    }

    fn unavailable() -> AppError {
        AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "directory store offline".to_string(),
        }
    }
}

impl Default for MockAmbulanceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AmbulanceRepository for MockAmbulanceRepo {
    async fn find_all(&self) -> AppResult<Vec<Ambulance>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.stored())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ambulance>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self
            .stored()
            .into_iter()
            .find(|ambulance| ambulance.id == id))
    }

    async fn create(&self, ambulance: &NewAmbulance) -> AppResult<Ambulance> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let created = Ambulance {
            id: Uuid::new_v4(),
            name: ambulance.name.clone(),
            contact: ambulance.contact.clone(),
            location: ambulance.location,
            created_at: Utc::now(),
        };

        self.ambulances
            .lock()
            .expect("mock state lock should not be poisoned")
            .push(created.clone());

        Ok(created)
    }
}
