//! Application services - Use case implementations
//!
//! Each service accepts its port dependencies at construction and returns
//! domain aggregates; the HTTP layer converts them to DTOs.

pub mod catalog_service;
pub mod encounter_service;

pub use catalog_service::{CatalogFacets, CatalogService, CreatureFilter};
pub use encounter_service::{
    CreateEncounterRequest, EncounterAnalysis, EncounterService, EncounterServiceError,
    EncounterServiceImpl, PartyUpdate,
};
