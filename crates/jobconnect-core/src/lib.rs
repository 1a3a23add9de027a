//! # JobConnect Core
//!
//! The domain layer of the JobConnect services.
//! Entities, patch objects, repository ports and the services that drive them.
//! Nothing in here knows about HTTP or SQL.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use pagination::{Page, PageRequest};
