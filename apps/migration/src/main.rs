//! Migration CLI tool.
//!
//! `cargo run -p migration -- up` applies pending migrations against
//! `DATABASE_URL`; `down`, `fresh`, `status` and the other sea-orm-cli
//! subcommands work the same way.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Running JobConnect migrations");
    cli::run_cli(migration::Migrator).await;
}
