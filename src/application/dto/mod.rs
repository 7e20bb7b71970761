//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP adapter can
//! serialize/deserialize without shaping the domain model around JSON.

pub mod creature;
pub mod encounter;

pub use creature::*;
pub use encounter::*;
