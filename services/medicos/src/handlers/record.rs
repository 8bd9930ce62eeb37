use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medicos_domain::id::{PatientId, RecordId};

use crate::domain::types::{MedicalRecord, RecordDraft};
use crate::error::MedicosServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::record::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};

#[derive(Deserialize)]
pub struct MedicalRecordRequest {
    pub notes: String,
    pub weight_kg: f64,
    pub blood_pressure: String,
    pub treatment: Option<String>,
    pub photo_url: Option<String>,
}

impl From<MedicalRecordRequest> for RecordDraft {
    fn from(body: MedicalRecordRequest) -> Self {
        Self {
            notes: body.notes,
            weight_kg: body.weight_kg,
            blood_pressure: body.blood_pressure,
            treatment: body.treatment,
            photo_url: body.photo_url,
        }
    }
}

#[derive(Serialize)]
pub struct MedicalRecordResponse {
    pub record_id: RecordId,
    pub patient_id: PatientId,
    #[serde(serialize_with = "medicos_core::serde::to_rfc3339_ms")]
    pub record_date: DateTime<Utc>,
    pub notes: String,
    pub weight_kg: f64,
    pub blood_pressure: String,
    pub treatment: Option<String>,
    pub photo_url: Option<String>,
}

impl From<MedicalRecord> for MedicalRecordResponse {
    fn from(r: MedicalRecord) -> Self {
        Self {
            record_id: r.id,
            patient_id: r.patient_id,
            record_date: r.record_date,
            notes: r.notes,
            weight_kg: r.weight_kg,
            blood_pressure: r.blood_pressure,
            treatment: r.treatment,
            photo_url: r.photo_url,
        }
    }
}

// ── GET /patients/{patient_id}/records ───────────────────────────────────────

pub async fn list_records(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u32>,
) -> Result<Json<Vec<MedicalRecordResponse>>, MedicosServiceError> {
    let usecase = ListRecordsUseCase {
        repo: state.record_repo(),
    };
    let records = usecase.execute(PatientId(patient_id)).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

// ── POST /patients/{patient_id}/records ──────────────────────────────────────

pub async fn create_record(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u32>,
    AppJson(body): AppJson<MedicalRecordRequest>,
) -> Result<Json<MedicalRecordResponse>, MedicosServiceError> {
    let usecase = CreateRecordUseCase {
        repo: state.record_repo(),
    };
    let record = usecase.execute(PatientId(patient_id), body.into()).await?;
    Ok(Json(record.into()))
}

// ── PUT /medical_records/{record_id} ─────────────────────────────────────────

pub async fn update_record(
    State(state): State<AppState>,
    AppPath(record_id): AppPath<u32>,
    AppJson(body): AppJson<MedicalRecordRequest>,
) -> Result<Json<MedicalRecordResponse>, MedicosServiceError> {
    let usecase = UpdateRecordUseCase {
        repo: state.record_repo(),
    };
    let record = usecase.execute(RecordId(record_id), body.into()).await?;
    Ok(Json(record.into()))
}

// ── DELETE /medical_records/{record_id} ──────────────────────────────────────

pub async fn delete_record(
    State(state): State<AppState>,
    AppPath(record_id): AppPath<u32>,
) -> Result<StatusCode, MedicosServiceError> {
    let usecase = DeleteRecordUseCase {
        repo: state.record_repo(),
    };
    usecase.execute(RecordId(record_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
