//! Data Transfer Objects - request/response types for the API.

pub mod feed;
pub mod job;
pub mod profile;
