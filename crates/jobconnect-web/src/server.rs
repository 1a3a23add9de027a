//! Server bootstrap shared by the service binaries.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::error::bad_request;
use crate::health::{ServiceInfo, health_check};
use crate::request_id::RequestIdMiddleware;

/// Extractor error handlers plus `GET /api/health`. Every app, including the
/// test apps, registers this before its own routes.
pub fn configure_common(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(bad_request))
        .app_data(web::QueryConfig::default().error_handler(bad_request))
        .app_data(web::PathConfig::default().error_handler(bad_request))
        .route("/api/health", web::get().to(health_check));
}

/// Run the HTTP server until shutdown. `configure` registers the service's
/// state and routes.
pub async fn serve<F>(config: &AppConfig, info: ServiceInfo, configure: F) -> std::io::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    tracing::info!(
        service = %info.name,
        storage = info.storage.as_str(),
        "Starting {} on {}:{}",
        info.name,
        config.host,
        config.port
    );

    let info = web::Data::new(info);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(info.clone())
            .configure(configure_common)
            .configure(configure.clone())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
