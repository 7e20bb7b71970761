//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog: JSON creature catalog adapter
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod catalog;
pub mod config;
pub mod http;
pub mod state;
