use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use medicos_core::health::{healthz, readyz};
use medicos_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    appointment::{create_appointment, delete_appointment, list_appointments, update_appointment},
    auth::{login, register_doctor},
    patient::{create_patient, delete_patient, list_patients, update_patient},
    record::{create_record, delete_record, list_records, update_record},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/doctors", post(register_doctor))
        .route("/login", post(login))
        // Patients
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/{patient_id}", put(update_patient).delete(delete_patient))
        // Medical records
        .route(
            "/patients/{patient_id}/records",
            get(list_records).post(create_record),
        )
        .route(
            "/medical_records/{record_id}",
            put(update_record).delete(delete_record),
        )
        // Appointments
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/appointments/{appointment_id}",
            put(update_appointment).delete(delete_appointment),
        )
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
