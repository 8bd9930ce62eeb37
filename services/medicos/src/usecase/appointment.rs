use tracing::info;

use medicos_domain::id::AppointmentId;

use crate::domain::repository::AppointmentRepository;
use crate::domain::types::{Appointment, AppointmentDraft};
use crate::error::MedicosServiceError;

// ── ListAppointments ─────────────────────────────────────────────────────────

/// Every appointment in the system, unfiltered.
pub struct ListAppointmentsUseCase<R: AppointmentRepository> {
    pub repo: R,
}

impl<R: AppointmentRepository> ListAppointmentsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Appointment>, MedicosServiceError> {
        self.repo.list().await
    }
}

// ── CreateAppointment ────────────────────────────────────────────────────────

pub struct CreateAppointmentUseCase<R: AppointmentRepository> {
    pub repo: R,
}

impl<R: AppointmentRepository> CreateAppointmentUseCase<R> {
    pub async fn execute(
        &self,
        draft: AppointmentDraft,
    ) -> Result<Appointment, MedicosServiceError> {
        let appointment = self.repo.create(draft).await?;
        info!(
            appointment_id = %appointment.id,
            patient_id = %appointment.patient_id,
            "appointment scheduled"
        );
        Ok(appointment)
    }
}

// ── UpdateAppointment ────────────────────────────────────────────────────────

pub struct UpdateAppointmentUseCase<R: AppointmentRepository> {
    pub repo: R,
}

impl<R: AppointmentRepository> UpdateAppointmentUseCase<R> {
    pub async fn execute(
        &self,
        id: AppointmentId,
        draft: AppointmentDraft,
    ) -> Result<Appointment, MedicosServiceError> {
        let appointment = self
            .repo
            .update(id, draft)
            .await?
            .ok_or(MedicosServiceError::AppointmentNotFound)?;
        info!(appointment_id = %id, patient_id = %appointment.patient_id, "appointment updated");
        Ok(appointment)
    }
}

// ── DeleteAppointment ────────────────────────────────────────────────────────

pub struct DeleteAppointmentUseCase<R: AppointmentRepository> {
    pub repo: R,
}

impl<R: AppointmentRepository> DeleteAppointmentUseCase<R> {
    pub async fn execute(&self, id: AppointmentId) -> Result<(), MedicosServiceError> {
        if !self.repo.delete(id).await? {
            return Err(MedicosServiceError::AppointmentNotFound);
        }
        info!(appointment_id = %id, "appointment deleted");
        Ok(())
    }
}
