//! In-memory entity store.
//!
//! All four tables and their id counters live behind one `RwLock`, so every
//! mutation (including find-then-replace and the patient cascade) runs as a
//! single critical section. Guards are never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use medicos_domain::id::{AppointmentId, PatientId, RecordId, UserId};

use crate::domain::repository::{
    AppointmentRepository, MedicalRecordRepository, PatientRepository, UserRepository,
};
use crate::domain::types::{
    Appointment, AppointmentDraft, MedicalRecord, NewUser, Patient, PatientDraft, RecordDraft,
    User, same_email,
};
use crate::error::MedicosServiceError;

struct Tables {
    users: BTreeMap<UserId, User>,
    patients: BTreeMap<PatientId, Patient>,
    records: BTreeMap<RecordId, MedicalRecord>,
    appointments: BTreeMap<AppointmentId, Appointment>,
    next_user_id: UserId,
    next_patient_id: PatientId,
    next_record_id: RecordId,
    next_appointment_id: AppointmentId,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            patients: BTreeMap::new(),
            records: BTreeMap::new(),
            appointments: BTreeMap::new(),
            next_user_id: UserId(1),
            next_patient_id: PatientId(1),
            next_record_id: RecordId(1),
            next_appointment_id: AppointmentId(1),
        }
    }

    fn take_user_id(&mut self) -> Result<UserId, MedicosServiceError> {
        let next = self.next_user_id.next().map_err(anyhow::Error::from)?;
        Ok(std::mem::replace(&mut self.next_user_id, next))
    }

    fn take_patient_id(&mut self) -> Result<PatientId, MedicosServiceError> {
        let next = self.next_patient_id.next().map_err(anyhow::Error::from)?;
        Ok(std::mem::replace(&mut self.next_patient_id, next))
    }

    fn take_record_id(&mut self) -> Result<RecordId, MedicosServiceError> {
        let next = self.next_record_id.next().map_err(anyhow::Error::from)?;
        Ok(std::mem::replace(&mut self.next_record_id, next))
    }

    fn take_appointment_id(&mut self) -> Result<AppointmentId, MedicosServiceError> {
        let next = self.next_appointment_id.next().map_err(anyhow::Error::from)?;
        Ok(std::mem::replace(&mut self.next_appointment_id, next))
    }
}

/// Owned handle to the in-memory tables. Cloning shares the same tables;
/// dropping the last handle tears them down.
#[derive(Clone)]
pub struct EntityStore {
    tables: Arc<RwLock<Tables>>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Empty tables with every counter starting at 1.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, MedicosServiceError> {
        self.tables
            .read()
            .map_err(|_| MedicosServiceError::Internal(anyhow::anyhow!("entity store poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, MedicosServiceError> {
        self.tables
            .write()
            .map_err(|_| MedicosServiceError::Internal(anyhow::anyhow!("entity store poisoned")))
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryUserRepository {
    pub store: EntityStore,
}

impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MedicosServiceError> {
        Ok(self
            .store
            .read()?
            .users
            .values()
            .find(|u| same_email(&u.email, email))
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, MedicosServiceError> {
        let mut tables = self.store.write()?;
        if tables.users.values().any(|u| same_email(&u.email, &user.email)) {
            return Err(MedicosServiceError::DuplicateEmail);
        }
        let id = tables.take_user_id()?;
        let user = User {
            id,
            full_name: user.full_name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}

// ── Patient repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryPatientRepository {
    pub store: EntityStore,
}

impl PatientRepository for MemoryPatientRepository {
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Patient>, MedicosServiceError> {
        Ok(self
            .store
            .read()?
            .patients
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: PatientDraft) -> Result<Patient, MedicosServiceError> {
        let mut tables = self.store.write()?;
        if !tables.users.contains_key(&draft.user_id) {
            return Err(MedicosServiceError::UserNotFound);
        }
        let patient = Patient::from_draft(tables.take_patient_id()?, draft);
        tables.patients.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn update(
        &self,
        id: PatientId,
        draft: PatientDraft,
    ) -> Result<Option<Patient>, MedicosServiceError> {
        let mut tables = self.store.write()?;
        let Some(existing) = tables.patients.get(&id) else {
            return Ok(None);
        };
        let updated = existing.replaced_with(draft);
        tables.patients.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: PatientId) -> Result<bool, MedicosServiceError> {
        let mut tables = self.store.write()?;
        if tables.patients.remove(&id).is_none() {
            return Ok(false);
        }
        tables.records.retain(|_, r| r.patient_id != id);
        tables.appointments.retain(|_, a| a.patient_id != id);
        Ok(true)
    }
}

// ── Medical record repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryMedicalRecordRepository {
    pub store: EntityStore,
}

impl MedicalRecordRepository for MemoryMedicalRecordRepository {
    async fn list_by_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<MedicalRecord>, MedicosServiceError> {
        Ok(self
            .store
            .read()?
            .records
            .values()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        patient_id: PatientId,
        record_date: DateTime<Utc>,
        draft: RecordDraft,
    ) -> Result<MedicalRecord, MedicosServiceError> {
        let mut tables = self.store.write()?;
        let record =
            MedicalRecord::from_draft(tables.take_record_id()?, patient_id, record_date, draft);
        tables.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: RecordId,
        draft: RecordDraft,
    ) -> Result<Option<MedicalRecord>, MedicosServiceError> {
        let mut tables = self.store.write()?;
        let Some(existing) = tables.records.get(&id) else {
            return Ok(None);
        };
        let updated = existing.merged_with(draft);
        tables.records.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, MedicosServiceError> {
        Ok(self.store.write()?.records.remove(&id).is_some())
    }
}

// ── Appointment repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryAppointmentRepository {
    pub store: EntityStore,
}

impl AppointmentRepository for MemoryAppointmentRepository {
    async fn list(&self) -> Result<Vec<Appointment>, MedicosServiceError> {
        Ok(self.store.read()?.appointments.values().cloned().collect())
    }

    async fn create(&self, draft: AppointmentDraft) -> Result<Appointment, MedicosServiceError> {
        let mut tables = self.store.write()?;
        let appointment = Appointment::from_draft(tables.take_appointment_id()?, draft);
        tables
            .appointments
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn update(
        &self,
        id: AppointmentId,
        draft: AppointmentDraft,
    ) -> Result<Option<Appointment>, MedicosServiceError> {
        let mut tables = self.store.write()?;
        let Some(existing) = tables.appointments.get(&id) else {
            return Ok(None);
        };
        let updated = existing.merged_with(draft);
        tables.appointments.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: AppointmentId) -> Result<bool, MedicosServiceError> {
        Ok(self.store.write()?.appointments.remove(&id).is_some())
    }
}
