//! Response models for the admin API
//!
//! DTOs serialized into HTTP response bodies. Stats responses serialize
//! the manager's snapshot directly and need no DTO here.

pub mod responses;

pub use responses::{ClearResponse, DeleteResponse, GetResponse, HealthResponse};
