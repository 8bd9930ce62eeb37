/// Medicos service configuration loaded from environment variables.
#[derive(Debug)]
pub struct MedicosConfig {
    /// TCP port for the HTTP server (default 8000). Env var: `MEDICOS_PORT`.
    pub medicos_port: u16,
    /// HMAC secret for signing access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Load the demo admin, patients and record at startup (default true).
    /// Env var: `MEDICOS_SEED_DEMO`.
    pub seed_demo: bool,
}

impl MedicosConfig {
    pub fn from_env() -> Self {
        Self {
            medicos_port: std::env::var("MEDICOS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            seed_demo: std::env::var("MEDICOS_SEED_DEMO")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
