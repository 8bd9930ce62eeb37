use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{
    assert_error, assert_not_found, create_patient, empty_server, patient_body, register_doctor,
    seeded_server,
};

#[tokio::test]
async fn should_list_only_patients_of_requested_user() {
    let server = empty_server();
    let first = register_doctor(&server, "one@test.com").await;
    let second = register_doctor(&server, "two@test.com").await;
    create_patient(&server, first, "Juan Perez").await;
    create_patient(&server, second, "Ana Garcia").await;
    create_patient(&server, first, "Luis Soto").await;

    let resp = server
        .get("/patients")
        .add_query_param("user_id", first)
        .await;
    resp.assert_status_ok();
    let body = resp.json::<Vec<Value>>();
    let names: Vec<_> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Juan Perez", "Luis Soto"]);
    assert!(body.iter().all(|p| p["user_id"] == first));
}

#[tokio::test]
async fn should_round_trip_patient_fields() {
    let server = empty_server();
    let owner = register_doctor(&server, "one@test.com").await;
    let resp = server
        .post("/patients")
        .json(&json!({
            "name": "Juan Perez",
            "birth_date": "1990-05-15",
            "user_id": owner,
        }))
        .await;
    resp.assert_status_ok();
    let created = resp.json::<Value>();

    let listed = server
        .get("/patients")
        .add_query_param("user_id", owner)
        .await
        .json::<Vec<Value>>();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created["name"], "Juan Perez");
    assert_eq!(created["birth_date"], "1990-05-15");
    assert_eq!(created["contact_info"], Value::Null);
}

#[tokio::test]
async fn should_keep_owner_when_update_payload_names_another_user() {
    let server = seeded_server().await;
    let other = register_doctor(&server, "two@test.com").await;

    let resp = server
        .put("/patients/1")
        .json(&patient_body(other, "Juan Pérez"))
        .await;
    resp.assert_status_ok();
    let body = resp.json::<Value>();
    assert_eq!(body["patient_id"], 1);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["name"], "Juan Pérez");

    let mine = server
        .get("/patients")
        .add_query_param("user_id", other)
        .await
        .json::<Vec<Value>>();
    assert!(mine.is_empty());
}

#[tokio::test]
async fn should_reject_patient_for_unknown_user() {
    let server = empty_server();
    let resp = server.post("/patients").json(&patient_body(42, "Nadie")).await;
    assert_not_found(resp.status_code(), &resp.json::<Value>(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_delete_patient_and_its_dependents() {
    let server = seeded_server().await;

    let resp = server.delete("/patients/1").await;
    resp.assert_status(StatusCode::NO_CONTENT);

    let records = server.get("/patients/1/records").await.json::<Vec<Value>>();
    assert!(records.is_empty());
    let remaining = server
        .get("/patients")
        .add_query_param("user_id", 1)
        .await
        .json::<Vec<Value>>();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["patient_id"], 2);
}

#[tokio::test]
async fn should_return_404_for_missing_patient() {
    let server = seeded_server().await;

    let resp = server.put("/patients/99").json(&patient_body(1, "x")).await;
    assert_not_found(resp.status_code(), &resp.json::<Value>(), "PATIENT_NOT_FOUND");

    let resp = server.delete("/patients/99").await;
    assert_not_found(resp.status_code(), &resp.json::<Value>(), "PATIENT_NOT_FOUND");

    // Deleting twice: the second attempt finds nothing.
    server.delete("/patients/2").await.assert_status(StatusCode::NO_CONTENT);
    let resp = server.delete("/patients/2").await;
    assert_error(&resp.json::<Value>(), "PATIENT_NOT_FOUND");
}

#[tokio::test]
async fn should_not_reuse_deleted_patient_id() {
    let server = seeded_server().await;
    server.delete("/patients/2").await.assert_status(StatusCode::NO_CONTENT);
    let id = create_patient(&server, 1, "Nuevo").await;
    assert_eq!(id, 3);
}

#[tokio::test]
async fn should_answer_malformed_ids_and_queries_with_error_json() {
    let server = seeded_server().await;

    let resp = server.delete("/patients/abc").await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&resp.json::<Value>(), "INVALID_REQUEST");

    let resp = server.get("/patients").await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&resp.json::<Value>(), "INVALID_REQUEST");

    let mut body = patient_body(1, "Juan Perez");
    body["birth_date"] = json!("15/05/1990");
    let resp = server.post("/patients").json(&body).await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&resp.json::<Value>(), "INVALID_REQUEST");
}
