//! Data Transfer Objects for JSON responses.

pub mod record_dto;

pub use record_dto::*;
