use tracing::info;

use medicos_domain::id::{PatientId, UserId};

use crate::domain::repository::PatientRepository;
use crate::domain::types::{Patient, PatientDraft};
use crate::error::MedicosServiceError;

// ── ListPatients ─────────────────────────────────────────────────────────────

/// Query filter on the owning user. Not an access check: nothing verifies
/// that the caller is that user.
pub struct ListPatientsUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> ListPatientsUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Patient>, MedicosServiceError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── CreatePatient ────────────────────────────────────────────────────────────

pub struct CreatePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> CreatePatientUseCase<R> {
    pub async fn execute(&self, draft: PatientDraft) -> Result<Patient, MedicosServiceError> {
        let patient = self.repo.create(draft).await?;
        info!(patient_id = %patient.id, user_id = %patient.user_id, "patient created");
        Ok(patient)
    }
}

// ── UpdatePatient ────────────────────────────────────────────────────────────

pub struct UpdatePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> UpdatePatientUseCase<R> {
    pub async fn execute(
        &self,
        id: PatientId,
        draft: PatientDraft,
    ) -> Result<Patient, MedicosServiceError> {
        let patient = self
            .repo
            .update(id, draft)
            .await?
            .ok_or(MedicosServiceError::PatientNotFound)?;
        info!(patient_id = %id, "patient updated");
        Ok(patient)
    }
}

// ── DeletePatient ────────────────────────────────────────────────────────────

pub struct DeletePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> DeletePatientUseCase<R> {
    pub async fn execute(&self, id: PatientId) -> Result<(), MedicosServiceError> {
        if !self.repo.delete(id).await? {
            return Err(MedicosServiceError::PatientNotFound);
        }
        info!(patient_id = %id, "patient deleted with its records and appointments");
        Ok(())
    }
}
