use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Medicos service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MedicosServiceError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid email")]
    InvalidEmail,
    #[error("weight must be a positive number")]
    InvalidWeight,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("patient not found")]
    PatientNotFound,
    #[error("medical record not found")]
    RecordNotFound,
    #[error("appointment not found")]
    AppointmentNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MedicosServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidWeight => "INVALID_WEIGHT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PatientNotFound => "PATIENT_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::AppointmentNotFound => "APPOINTMENT_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for MedicosServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DuplicateEmail | Self::InvalidEmail | Self::InvalidWeight => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound
            | Self::PatientNotFound
            | Self::RecordNotFound
            | Self::AppointmentNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
