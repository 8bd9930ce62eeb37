use tracing::{info, warn};

use medicos_domain::id::UserId;
use medicos_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, normalize_email, validate_email};
use crate::error::MedicosServiceError;
use crate::usecase::credential::{CredentialHasher, issue_access_token};

// ── RegisterDoctor ───────────────────────────────────────────────────────────

pub struct RegisterDoctorInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterDoctorUseCase<R: UserRepository> {
    pub repo: R,
    pub hasher: CredentialHasher,
}

impl<R: UserRepository> RegisterDoctorUseCase<R> {
    pub async fn execute(&self, input: RegisterDoctorInput) -> Result<User, MedicosServiceError> {
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(MedicosServiceError::InvalidEmail);
        }
        // Skips hashing for a taken email; `create` re-checks under the lock.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(MedicosServiceError::DuplicateEmail);
        }
        let password_hash = self.hasher.hash(&input.password)?;
        let user = self
            .repo
            .create(NewUser {
                full_name: input.full_name,
                email,
                password_hash,
                role: UserRole::Doctor,
            })
            .await?;
        info!(user_id = %user.id, "doctor registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub access_token: String,
    pub user_id: UserId,
    pub role: UserRole,
    pub full_name: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub hasher: CredentialHasher,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, MedicosServiceError> {
        let email = normalize_email(&input.email);
        let user = self.repo.find_by_email(&email).await?;
        let Some(user) =
            user.filter(|u| self.hasher.verify(&input.password, &u.password_hash))
        else {
            warn!("rejected login");
            return Err(MedicosServiceError::InvalidCredentials);
        };

        let (access_token, _exp) = issue_access_token(&user, &self.jwt_secret)?;
        info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(LoginOutput {
            access_token,
            user_id: user.id,
            role: user.role,
            full_name: user.full_name,
        })
    }
}
