#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use medicos_domain::id::{AppointmentId, PatientId, RecordId, UserId};

use crate::domain::types::{
    Appointment, AppointmentDraft, MedicalRecord, NewUser, Patient, PatientDraft, RecordDraft,
    User,
};
use crate::error::MedicosServiceError;

/// Repository for doctor/admin accounts.
pub trait UserRepository: Send + Sync {
    /// Case-insensitive match on the stored email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MedicosServiceError>;

    /// Insert a user. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, MedicosServiceError>;
}

/// Repository for patients.
pub trait PatientRepository: Send + Sync {
    /// Patients owned by `user_id`, ascending id.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Patient>, MedicosServiceError>;

    /// Insert a patient. Fails with `UserNotFound` if the owner does not exist.
    async fn create(&self, draft: PatientDraft) -> Result<Patient, MedicosServiceError>;

    /// Replace a patient, keeping its owner. Returns `None` if the id is absent.
    async fn update(
        &self,
        id: PatientId,
        draft: PatientDraft,
    ) -> Result<Option<Patient>, MedicosServiceError>;

    /// Delete a patient and its records and appointments. Returns `true` if a
    /// patient was deleted.
    async fn delete(&self, id: PatientId) -> Result<bool, MedicosServiceError>;
}

/// Repository for medical records.
pub trait MedicalRecordRepository: Send + Sync {
    async fn list_by_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<MedicalRecord>, MedicosServiceError>;

    /// Insert a record. `patient_id` is stored as given.
    async fn create(
        &self,
        patient_id: PatientId,
        record_date: DateTime<Utc>,
        draft: RecordDraft,
    ) -> Result<MedicalRecord, MedicosServiceError>;

    /// Merge `draft` over a record. Returns `None` if the id is absent.
    async fn update(
        &self,
        id: RecordId,
        draft: RecordDraft,
    ) -> Result<Option<MedicalRecord>, MedicosServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: RecordId) -> Result<bool, MedicosServiceError>;
}

/// Repository for appointments.
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>, MedicosServiceError>;

    /// Insert an appointment with status `Scheduled`.
    async fn create(&self, draft: AppointmentDraft) -> Result<Appointment, MedicosServiceError>;

    /// Merge `draft` over an appointment. Returns `None` if the id is absent.
    async fn update(
        &self,
        id: AppointmentId,
        draft: AppointmentDraft,
    ) -> Result<Option<Appointment>, MedicosServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: AppointmentId) -> Result<bool, MedicosServiceError>;
}
