//! # JobConnect Infrastructure
//!
//! Concrete implementations of the ports defined in `jobconnect-core`:
//! SeaORM repositories over the shared Postgres schema and an in-memory
//! fallback with the same semantics.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod memory;
pub mod repositories;

pub use database::DatabaseConfig;
pub use memory::InMemoryDatabase;
pub use repositories::{Repositories, StorageKind};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
