use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medicos_domain::appointment::AppointmentStatus;
use medicos_domain::id::{AppointmentId, PatientId};

use crate::domain::types::{Appointment, AppointmentDraft};
use crate::error::MedicosServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::appointment::{
    CreateAppointmentUseCase, DeleteAppointmentUseCase, ListAppointmentsUseCase,
    UpdateAppointmentUseCase,
};

/// No `status` field: clients cannot set it.
#[derive(Deserialize)]
pub struct AppointmentRequest {
    pub patient_id: u32,
    #[serde(deserialize_with = "medicos_core::serde::from_datetime_lenient")]
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub doctor_name: Option<String>,
}

impl From<AppointmentRequest> for AppointmentDraft {
    fn from(body: AppointmentRequest) -> Self {
        Self {
            patient_id: PatientId(body.patient_id),
            appointment_date: body.appointment_date,
            reason: body.reason,
            doctor_name: body.doctor_name,
        }
    }
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    #[serde(serialize_with = "medicos_core::serde::to_rfc3339_ms")]
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub doctor_name: Option<String>,
    pub status: AppointmentStatus,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            appointment_id: a.id,
            patient_id: a.patient_id,
            appointment_date: a.appointment_date,
            reason: a.reason,
            doctor_name: a.doctor_name,
            status: a.status,
        }
    }
}

// ── GET /appointments ────────────────────────────────────────────────────────

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentResponse>>, MedicosServiceError> {
    let usecase = ListAppointmentsUseCase {
        repo: state.appointment_repo(),
    };
    let appointments = usecase.execute().await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

// ── POST /appointments ───────────────────────────────────────────────────────

pub async fn create_appointment(
    State(state): State<AppState>,
    AppJson(body): AppJson<AppointmentRequest>,
) -> Result<Json<AppointmentResponse>, MedicosServiceError> {
    let usecase = CreateAppointmentUseCase {
        repo: state.appointment_repo(),
    };
    let appointment = usecase.execute(body.into()).await?;
    Ok(Json(appointment.into()))
}

// ── PUT /appointments/{appointment_id} ───────────────────────────────────────

pub async fn update_appointment(
    State(state): State<AppState>,
    AppPath(appointment_id): AppPath<u32>,
    AppJson(body): AppJson<AppointmentRequest>,
) -> Result<Json<AppointmentResponse>, MedicosServiceError> {
    let usecase = UpdateAppointmentUseCase {
        repo: state.appointment_repo(),
    };
    let appointment = usecase
        .execute(AppointmentId(appointment_id), body.into())
        .await?;
    Ok(Json(appointment.into()))
}

// ── DELETE /appointments/{appointment_id} ────────────────────────────────────

pub async fn delete_appointment(
    State(state): State<AppState>,
    AppPath(appointment_id): AppPath<u32>,
) -> Result<StatusCode, MedicosServiceError> {
    let usecase = DeleteAppointmentUseCase {
        repo: state.appointment_repo(),
    };
    usecase.execute(AppointmentId(appointment_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
