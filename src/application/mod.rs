//! Application layer - Use cases and orchestration
//!
//! This layer contains:
//! - Services: Encounter drafting and catalog search use cases
//! - Ports: Interfaces the application needs from the outside world
//! - DTOs: Shapes exchanged across the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
