//! Domain layer - Core business logic with no framework dependencies
//!
//! This layer contains:
//! - Entities: CreatureDefinition, PartyConfig, Roster
//! - Value Objects: Organization, CreatureRole, DifficultyTier, ids
//! - Aggregates: Encounter aggregate root
//! - Domain Services: Composition analysis

pub mod aggregates;
pub mod entities;
pub mod services;
pub mod value_objects;
