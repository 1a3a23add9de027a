//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name recorded in the startup event and health endpoint.
    pub service_name: String,
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env(default_service_name: &str) -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| default_service_name.to_string()),
        }
    }

    /// Filter used when `RUST_LOG` is unset: debug for our own crates.
    fn default_filter(&self, crate_name: &str) -> String {
        format!(
            "info,{crate_name}=debug,jobconnect_core=debug,jobconnect_infra=debug,jobconnect_web=debug"
        )
    }
}

/// Initialize the global tracing subscriber. `crate_name` is the binary's
/// crate name as it appears in log targets.
pub fn init_telemetry(config: &TelemetryConfig, crate_name: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter(crate_name)));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_the_binary() {
        let config = TelemetryConfig {
            json_logs: false,
            service_name: "feed-service".into(),
        };
        let filter = config.default_filter("feed_service");
        assert!(filter.starts_with("info,feed_service=debug"));
        assert!(filter.contains("jobconnect_infra=debug"));
    }
}
