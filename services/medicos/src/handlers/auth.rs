use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use medicos_domain::id::UserId;
use medicos_domain::user::UserRole;

use crate::error::MedicosServiceError;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterDoctorInput, RegisterDoctorUseCase};
use crate::usecase::credential::TOKEN_TYPE;

// ── POST /doctors ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterDoctorRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Account as shown to clients; the credential never leaves the store.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

pub async fn register_doctor(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterDoctorRequest>,
) -> Result<Json<UserResponse>, MedicosServiceError> {
    let usecase = RegisterDoctorUseCase {
        repo: state.user_repo(),
        hasher: state.hasher.clone(),
    };
    let user = usecase
        .execute(RegisterDoctorInput {
            full_name: body.full_name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(UserResponse {
        user_id: user.id,
        full_name: user.full_name,
        email: user.email,
        role: user.role,
    }))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_id: UserId,
    pub role: UserRole,
    pub full_name: String,
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<TokenResponse>, MedicosServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        hasher: state.hasher.clone(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        access_token: out.access_token,
        token_type: TOKEN_TYPE,
        user_id: out.user_id,
        role: out.role,
        full_name: out.full_name,
    }))
}
