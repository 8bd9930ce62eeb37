use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{assert_not_found, empty_server, seeded_server};

fn appointment_body(patient_id: u64, reason: &str) -> Value {
    json!({
        "patient_id": patient_id,
        "appointment_date": "2025-03-10T09:30:00Z",
        "reason": reason,
        "doctor_name": "Dra. Ruiz",
    })
}

#[tokio::test]
async fn should_start_with_no_appointments() {
    let server = seeded_server().await;
    let resp = server.get("/appointments").await;
    resp.assert_status_ok();
    assert!(resp.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn should_schedule_appointment_ignoring_client_status() {
    let server = seeded_server().await;
    let mut body = appointment_body(1, "Control");
    body["status"] = json!("Cancelada");

    let resp = server.post("/appointments").json(&body).await;
    resp.assert_status_ok();
    let created = resp.json::<Value>();
    assert_eq!(created["appointment_id"], 1);
    assert_eq!(created["patient_id"], 1);
    assert_eq!(created["appointment_date"], "2025-03-10T09:30:00.000Z");
    assert_eq!(created["reason"], "Control");
    assert_eq!(created["doctor_name"], "Dra. Ruiz");
    assert_eq!(created["status"], "Programada");

    let listed = server.get("/appointments").await.json::<Vec<Value>>();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn should_accept_naive_appointment_date_as_utc() {
    let server = seeded_server().await;
    let mut body = appointment_body(1, "Control");
    body["appointment_date"] = json!("2025-03-10T09:30:00");
    let created = server.post("/appointments").json(&body).await.json::<Value>();
    assert_eq!(created["appointment_date"], "2025-03-10T09:30:00.000Z");
}

#[tokio::test]
async fn should_list_appointments_across_patients() {
    let server = seeded_server().await;
    for (patient_id, reason) in [(1, "Control"), (2, "Vacuna")] {
        server
            .post("/appointments")
            .json(&appointment_body(patient_id, reason))
            .await
            .assert_status_ok();
    }
    let listed = server.get("/appointments").await.json::<Vec<Value>>();
    let patients: Vec<_> = listed.iter().map(|a| a["patient_id"].clone()).collect();
    assert_eq!(patients, [json!(1), json!(2)]);
}

#[tokio::test]
async fn should_move_appointment_and_reset_status_on_update() {
    let server = seeded_server().await;
    server
        .post("/appointments")
        .json(&appointment_body(1, "Control"))
        .await
        .assert_status_ok();

    let resp = server
        .put("/appointments/1")
        .json(&appointment_body(2, "Control anual"))
        .await;
    resp.assert_status_ok();
    let updated = resp.json::<Value>();
    assert_eq!(updated["appointment_id"], 1);
    assert_eq!(updated["patient_id"], 2);
    assert_eq!(updated["reason"], "Control anual");
    assert_eq!(updated["status"], "Programada");
}

#[tokio::test]
async fn should_drop_appointments_with_deleted_patient() {
    let server = seeded_server().await;
    server
        .post("/appointments")
        .json(&appointment_body(2, "Vacuna"))
        .await
        .assert_status_ok();
    server.delete("/patients/2").await.assert_status(StatusCode::NO_CONTENT);

    assert!(server.get("/appointments").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn should_return_404_for_missing_appointment() {
    let server = seeded_server().await;

    let resp = server
        .put("/appointments/7")
        .json(&appointment_body(1, "Control"))
        .await;
    assert_not_found(resp.status_code(), &resp.json::<Value>(), "APPOINTMENT_NOT_FOUND");

    let resp = server.delete("/appointments/7").await;
    assert_not_found(resp.status_code(), &resp.json::<Value>(), "APPOINTMENT_NOT_FOUND");
}

#[tokio::test]
async fn should_schedule_and_move_appointment_without_patient_rows() {
    let server = empty_server();
    let resp = server
        .post("/appointments")
        .json(&appointment_body(1, "Control"))
        .await;
    resp.assert_status_ok();
    let created = resp.json::<Value>();
    assert_eq!(created["appointment_id"], 1);
    assert_eq!(created["patient_id"], 1);
    assert_eq!(created["status"], "Programada");

    let resp = server
        .put("/appointments/1")
        .json(&appointment_body(99, "Control anual"))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["patient_id"], 99);
}
