use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — the store lives in-process, so ready == alive.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
