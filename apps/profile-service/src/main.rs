//! # JobConnect Profile Service
//!
//! Professional profiles: headline, bio, skills, experience and education.

mod handlers;
mod state;

use jobconnect_infra::Repositories;
use jobconnect_web::{AppConfig, ServiceInfo, TelemetryConfig, init_telemetry, serve};

use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let telemetry = TelemetryConfig::from_env("profile-service");
    init_telemetry(&telemetry, env!("CARGO_CRATE_NAME"));

    let config = AppConfig::from_env(8083);
    let repos = Repositories::connect(config.database.as_ref()).await;

    let info = ServiceInfo {
        name: telemetry.service_name,
        storage: repos.kind,
    };
    let state = AppState::new(&repos);

    serve(&config, info, move |cfg| {
        handlers::configure_routes(cfg, state.clone())
    })
    .await
}
