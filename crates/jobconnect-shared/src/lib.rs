//! # JobConnect Shared
//!
//! Request and response types of the JobConnect HTTP APIs, with the
//! conversions to and from the domain types of `jobconnect-core`.
//! Every JSON field is camelCase on the wire.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, PageResponse};
