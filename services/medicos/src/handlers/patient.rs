use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medicos_domain::id::{PatientId, UserId};

use crate::domain::types::{Patient, PatientDraft};
use crate::error::MedicosServiceError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;
use crate::usecase::patient::{
    CreatePatientUseCase, DeletePatientUseCase, ListPatientsUseCase, UpdatePatientUseCase,
};

#[derive(Deserialize)]
pub struct PatientRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub contact_info: Option<String>,
    pub user_id: u32,
}

impl From<PatientRequest> for PatientDraft {
    fn from(body: PatientRequest) -> Self {
        Self {
            user_id: UserId(body.user_id),
            name: body.name,
            birth_date: body.birth_date,
            contact_info: body.contact_info,
        }
    }
}

#[derive(Serialize)]
pub struct PatientResponse {
    pub patient_id: PatientId,
    pub user_id: UserId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub contact_info: Option<String>,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        Self {
            patient_id: p.id,
            user_id: p.user_id,
            name: p.name,
            birth_date: p.birth_date,
            contact_info: p.contact_info,
        }
    }
}

// ── GET /patients?user_id= ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListPatientsQuery {
    pub user_id: u32,
}

pub async fn list_patients(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListPatientsQuery>,
) -> Result<Json<Vec<PatientResponse>>, MedicosServiceError> {
    let usecase = ListPatientsUseCase {
        repo: state.patient_repo(),
    };
    let patients = usecase.execute(UserId(query.user_id)).await?;
    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

// ── POST /patients ───────────────────────────────────────────────────────────

pub async fn create_patient(
    State(state): State<AppState>,
    AppJson(body): AppJson<PatientRequest>,
) -> Result<Json<PatientResponse>, MedicosServiceError> {
    let usecase = CreatePatientUseCase {
        repo: state.patient_repo(),
    };
    let patient = usecase.execute(body.into()).await?;
    Ok(Json(patient.into()))
}

// ── PUT /patients/{patient_id} ───────────────────────────────────────────────

pub async fn update_patient(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u32>,
    AppJson(body): AppJson<PatientRequest>,
) -> Result<Json<PatientResponse>, MedicosServiceError> {
    let usecase = UpdatePatientUseCase {
        repo: state.patient_repo(),
    };
    let patient = usecase.execute(PatientId(patient_id), body.into()).await?;
    Ok(Json(patient.into()))
}

// ── DELETE /patients/{patient_id} ────────────────────────────────────────────

pub async fn delete_patient(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u32>,
) -> Result<StatusCode, MedicosServiceError> {
    let usecase = DeletePatientUseCase {
        repo: state.patient_repo(),
    };
    usecase.execute(PatientId(patient_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
