use chrono::Utc;
use tracing::info;

use medicos_domain::id::{PatientId, RecordId};

use crate::domain::repository::MedicalRecordRepository;
use crate::domain::types::{MedicalRecord, RecordDraft, validate_weight};
use crate::error::MedicosServiceError;

// ── ListRecords ──────────────────────────────────────────────────────────────

/// An unknown patient and a patient without records both yield an empty list.
pub struct ListRecordsUseCase<R: MedicalRecordRepository> {
    pub repo: R,
}

impl<R: MedicalRecordRepository> ListRecordsUseCase<R> {
    pub async fn execute(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<MedicalRecord>, MedicosServiceError> {
        self.repo.list_by_patient(patient_id).await
    }
}

// ── CreateRecord ─────────────────────────────────────────────────────────────

pub struct CreateRecordUseCase<R: MedicalRecordRepository> {
    pub repo: R,
}

impl<R: MedicalRecordRepository> CreateRecordUseCase<R> {
    pub async fn execute(
        &self,
        patient_id: PatientId,
        draft: RecordDraft,
    ) -> Result<MedicalRecord, MedicosServiceError> {
        if !validate_weight(draft.weight_kg) {
            return Err(MedicosServiceError::InvalidWeight);
        }
        let record = self.repo.create(patient_id, Utc::now(), draft).await?;
        info!(record_id = %record.id, patient_id = %patient_id, "medical record created");
        Ok(record)
    }
}

// ── UpdateRecord ─────────────────────────────────────────────────────────────

pub struct UpdateRecordUseCase<R: MedicalRecordRepository> {
    pub repo: R,
}

impl<R: MedicalRecordRepository> UpdateRecordUseCase<R> {
    pub async fn execute(
        &self,
        id: RecordId,
        draft: RecordDraft,
    ) -> Result<MedicalRecord, MedicosServiceError> {
        if !validate_weight(draft.weight_kg) {
            return Err(MedicosServiceError::InvalidWeight);
        }
        let record = self
            .repo
            .update(id, draft)
            .await?
            .ok_or(MedicosServiceError::RecordNotFound)?;
        info!(record_id = %id, "medical record updated");
        Ok(record)
    }
}

// ── DeleteRecord ─────────────────────────────────────────────────────────────

pub struct DeleteRecordUseCase<R: MedicalRecordRepository> {
    pub repo: R,
}

impl<R: MedicalRecordRepository> DeleteRecordUseCase<R> {
    pub async fn execute(&self, id: RecordId) -> Result<(), MedicosServiceError> {
        if !self.repo.delete(id).await? {
            return Err(MedicosServiceError::RecordNotFound);
        }
        info!(record_id = %id, "medical record deleted");
        Ok(())
    }
}
