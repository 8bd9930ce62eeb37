use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use medicos_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::MedicosServiceError;

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_EXP: u64 = 60 * 60;

pub const TOKEN_TYPE: &str = "bearer";

/// Argon2id hashing with a fresh random salt per credential.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Hasher with explicit memory (KiB) and iteration costs.
    pub fn with_cost(m_cost: u32, t_cost: u32) -> Result<Self, MedicosServiceError> {
        let params = Params::new(m_cost, t_cost, 1, None)
            .map_err(|e| anyhow::anyhow!("invalid argon2 params: {e}"))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Returns a PHC string; cost parameters and salt travel with the hash.
    pub fn hash(&self, password: &str) -> Result<String, MedicosServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
        Ok(hash.to_string())
    }

    /// `false` for a mismatch and for an unparseable stored hash alike.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        PasswordHash::new(stored).is_ok_and(|parsed| {
            self.argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

/// JWT claims for access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub role: UserRole,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign an HS256 access token. Returns the token and its expiry (unix seconds).
pub fn issue_access_token(user: &User, secret: &str) -> Result<(String, u64), MedicosServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = AccessClaims {
        sub: user.id.to_string(),
        role: user.role,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| MedicosServiceError::Internal(e.into()))?;
    Ok((token, exp))
}
