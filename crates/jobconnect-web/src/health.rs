//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use jobconnect_infra::StorageKind;

/// Identity of the running service, registered as app data.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub storage: StorageKind,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub storage: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(info: web::Data<ServiceInfo>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        service: info.name.clone(),
        storage: info.storage.as_str(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
