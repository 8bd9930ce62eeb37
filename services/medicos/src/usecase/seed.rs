//! Demo dataset loaded at startup when `MEDICOS_SEED_DEMO` is on.

use chrono::{NaiveDate, Utc};
use tracing::info;

use medicos_domain::user::UserRole;

use crate::domain::repository::{MedicalRecordRepository, PatientRepository, UserRepository};
use crate::domain::types::{NewUser, PatientDraft, RecordDraft};
use crate::error::MedicosServiceError;
use crate::usecase::credential::CredentialHasher;

pub const DEMO_ADMIN_EMAIL: &str = "admin@test.com";
pub const DEMO_ADMIN_PASSWORD: &str = "fakepassword123";

pub struct SeedDemoDataUseCase<U, P, M>
where
    U: UserRepository,
    P: PatientRepository,
    M: MedicalRecordRepository,
{
    pub users: U,
    pub patients: P,
    pub records: M,
    pub hasher: CredentialHasher,
}

impl<U, P, M> SeedDemoDataUseCase<U, P, M>
where
    U: UserRepository,
    P: PatientRepository,
    M: MedicalRecordRepository,
{
    /// Insert the admin account, two of its patients and one record for the
    /// first patient. Expects an empty store so the ids come out as 1.
    pub async fn execute(&self) -> Result<(), MedicosServiceError> {
        let admin = self
            .users
            .create(NewUser {
                full_name: "Admin".to_owned(),
                email: DEMO_ADMIN_EMAIL.to_owned(),
                password_hash: self.hasher.hash(DEMO_ADMIN_PASSWORD)?,
                role: UserRole::Admin,
            })
            .await?;

        let mut seeded = Vec::new();
        for (name, born, contact) in [
            ("Juan Perez", (1990, 5, 15), "555-1234"),
            ("Ana Garcia", (1985, 11, 20), "555-5678"),
        ] {
            let (y, m, d) = born;
            let birth_date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| anyhow::anyhow!("invalid seed birth date for {name}"))?;
            let patient = self
                .patients
                .create(PatientDraft {
                    user_id: admin.id,
                    name: name.to_owned(),
                    birth_date,
                    contact_info: Some(contact.to_owned()),
                })
                .await?;
            seeded.push(patient);
        }

        let first = seeded
            .first()
            .ok_or_else(|| anyhow::anyhow!("no seed patient created"))?;
        self.records
            .create(
                first.id,
                Utc::now(),
                RecordDraft {
                    notes: "Gripe estacional.".to_owned(),
                    weight_kg: 75.5,
                    blood_pressure: "120/80".to_owned(),
                    treatment: Some("Paracetamol".to_owned()),
                    photo_url: None,
                },
            )
            .await?;

        info!(patients = seeded.len(), "demo data seeded");
        Ok(())
    }
}
