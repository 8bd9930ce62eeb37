use chrono::{DateTime, NaiveDate, Utc};

use medicos_domain::appointment::AppointmentStatus;
use medicos_domain::id::{AppointmentId, PatientId, RecordId, UserId};
use medicos_domain::user::UserRole;

/// A doctor or admin account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    /// Argon2 PHC string; the raw password is never kept.
    pub password_hash: String,
    pub role: UserRole,
}

/// Everything needed to insert a user except the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: PatientId,
    /// Owning user. Fixed at creation.
    pub user_id: UserId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub contact_info: Option<String>,
}

/// Creatable patient payload; also the full-replace payload for updates.
#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub user_id: UserId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub contact_info: Option<String>,
}

impl Patient {
    pub fn from_draft(id: PatientId, draft: PatientDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: draft.name,
            birth_date: draft.birth_date,
            contact_info: draft.contact_info,
        }
    }

    /// Full replace that ignores `draft.user_id`: ownership never moves.
    pub fn replaced_with(&self, draft: PatientDraft) -> Self {
        Self {
            id: self.id,
            user_id: self.user_id,
            name: draft.name,
            birth_date: draft.birth_date,
            contact_info: draft.contact_info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub patient_id: PatientId,
    pub record_date: DateTime<Utc>,
    pub notes: String,
    pub weight_kg: f64,
    /// Free text, conventionally "systolic/diastolic".
    pub blood_pressure: String,
    pub treatment: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub notes: String,
    pub weight_kg: f64,
    pub blood_pressure: String,
    pub treatment: Option<String>,
    pub photo_url: Option<String>,
}

impl MedicalRecord {
    pub fn from_draft(
        id: RecordId,
        patient_id: PatientId,
        record_date: DateTime<Utc>,
        draft: RecordDraft,
    ) -> Self {
        Self {
            id,
            patient_id,
            record_date,
            notes: draft.notes,
            weight_kg: draft.weight_kg,
            blood_pressure: draft.blood_pressure,
            treatment: draft.treatment,
            photo_url: draft.photo_url,
        }
    }

    /// Overwrite every payload field; id, patient and timestamp are kept.
    pub fn merged_with(&self, draft: RecordDraft) -> Self {
        Self::from_draft(self.id, self.patient_id, self.record_date, draft)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub doctor_name: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub patient_id: PatientId,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub doctor_name: Option<String>,
}

impl Appointment {
    pub fn from_draft(id: AppointmentId, draft: AppointmentDraft) -> Self {
        Self {
            id,
            patient_id: draft.patient_id,
            appointment_date: draft.appointment_date,
            reason: draft.reason,
            doctor_name: draft.doctor_name,
            status: AppointmentStatus::Scheduled,
        }
    }

    /// Overwrite every payload field, including the patient. Status goes back
    /// to `Scheduled` whatever it was.
    pub fn merged_with(&self, draft: AppointmentDraft) -> Self {
        Self::from_draft(self.id, draft)
    }
}

/// Strip surrounding whitespace; the caller's casing is kept for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_owned()
}

/// Email identity used for lookups and the uniqueness check: case-insensitive.
pub fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Basic shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate_weight(weight_kg: f64) -> bool {
    weight_kg.is_finite() && weight_kg > 0.0
}
