use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::{Value, json};

use medicos_api::usecase::credential::AccessClaims;
use medicos_api::usecase::seed::{DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD};

use crate::helpers::{
    TEST_JWT_SECRET, assert_error, empty_server, register_doctor, seeded_server,
};

#[tokio::test]
async fn should_register_doctor_without_exposing_password() {
    let server = empty_server();
    let resp = server
        .post("/doctors")
        .json(&json!({
            "full_name": "Gregory House",
            "email": "house@test.com",
            "password": "vicodin",
        }))
        .await;

    resp.assert_status_ok();
    let body = resp.json::<Value>();
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["full_name"], "Gregory House");
    assert_eq!(body["email"], "house@test.com");
    assert_eq!(body["role"], "doctor");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let server = empty_server();
    register_doctor(&server, "ruiz@test.com").await;

    let resp = server
        .post("/doctors")
        .json(&json!({
            "full_name": "Otra Ruiz",
            "email": "ruiz@test.com",
            "password": "other",
        }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&resp.json::<Value>(), "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn should_echo_email_casing_and_treat_case_variants_as_duplicates() {
    let server = empty_server();
    let resp = server
        .post("/doctors")
        .json(&json!({
            "full_name": "Dra. Ruiz",
            "email": "Dr.Ruiz@Clinic.com",
            "password": "s3cret",
        }))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["email"], "Dr.Ruiz@Clinic.com");

    let resp = server
        .post("/doctors")
        .json(&json!({
            "full_name": "Otra Ruiz",
            "email": "dr.ruiz@clinic.com",
            "password": "other",
        }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&resp.json::<Value>(), "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let server = empty_server();
    let resp = server
        .post("/doctors")
        .json(&json!({
            "full_name": "Nobody",
            "email": "nobody",
            "password": "x",
        }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&resp.json::<Value>(), "INVALID_EMAIL");
}

#[tokio::test]
async fn should_login_registered_doctor() {
    let server = empty_server();
    let user_id = register_doctor(&server, "ruiz@test.com").await;

    let resp = server
        .post("/login")
        .json(&json!({ "email": "ruiz@test.com", "password": "s3cret" }))
        .await;
    resp.assert_status_ok();
    let body = resp.json::<Value>();
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["role"], "doctor");
    assert_eq!(body["full_name"], "Dra. Ruiz");

    let token = body["access_token"].as_str().unwrap();
    let claims = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.sub, user_id.to_string());
}

#[tokio::test]
async fn should_login_seeded_admin() {
    let server = seeded_server().await;
    let resp = server
        .post("/login")
        .json(&json!({ "email": DEMO_ADMIN_EMAIL, "password": DEMO_ADMIN_PASSWORD }))
        .await;
    resp.assert_status_ok();
    let body = resp.json::<Value>();
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["full_name"], "Admin");
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email() {
    let server = empty_server();
    register_doctor(&server, "ruiz@test.com").await;

    for (email, password) in [("ruiz@test.com", "wrong"), ("ghost@test.com", "s3cret")] {
        let resp = server
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        resp.assert_status(StatusCode::UNAUTHORIZED);
        assert_error(&resp.json::<Value>(), "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn should_answer_incomplete_body_with_error_json() {
    let server = empty_server();
    let resp = server
        .post("/doctors")
        .json(&json!({ "full_name": "Nobody" }))
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&resp.json::<Value>(), "INVALID_REQUEST");
}
