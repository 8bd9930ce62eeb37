use crate::infra::memory::{
    EntityStore, MemoryAppointmentRepository, MemoryMedicalRecordRepository,
    MemoryPatientRepository, MemoryUserRepository,
};
use crate::usecase::credential::CredentialHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
    pub hasher: CredentialHasher,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> MemoryUserRepository {
        MemoryUserRepository {
            store: self.store.clone(),
        }
    }

    pub fn patient_repo(&self) -> MemoryPatientRepository {
        MemoryPatientRepository {
            store: self.store.clone(),
        }
    }

    pub fn record_repo(&self) -> MemoryMedicalRecordRepository {
        MemoryMedicalRecordRepository {
            store: self.store.clone(),
        }
    }

    pub fn appointment_repo(&self) -> MemoryAppointmentRepository {
        MemoryAppointmentRepository {
            store: self.store.clone(),
        }
    }
}
