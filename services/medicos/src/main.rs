use tracing::info;

use medicos_api::config::MedicosConfig;
use medicos_api::infra::memory::EntityStore;
use medicos_api::router::build_router;
use medicos_api::state::AppState;
use medicos_api::usecase::seed::SeedDemoDataUseCase;
use medicos_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MedicosConfig::from_env();

    let state = AppState {
        store: EntityStore::new(),
        hasher: Default::default(),
        jwt_secret: config.jwt_secret,
    };

    if config.seed_demo {
        SeedDemoDataUseCase {
            users: state.user_repo(),
            patients: state.patient_repo(),
            records: state.record_repo(),
            hasher: state.hasher.clone(),
        }
        .execute()
        .await
        .expect("failed to seed demo data");
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.medicos_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("medicos service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
