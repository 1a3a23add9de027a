//! # JobConnect Web
//!
//! The HTTP plumbing every JobConnect service binary shares: configuration,
//! telemetry, error mapping, request extractors, request ids, the health
//! endpoint and the server bootstrap.

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod request_id;
pub mod server;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use extract::{PageQuery, ViewerId};
pub use health::ServiceInfo;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use server::{configure_common, serve};
pub use telemetry::{TelemetryConfig, init_telemetry};
