//! Aggregates - Cluster of domain objects treated as a single unit

pub mod encounter_aggregate;

pub use encounter_aggregate::Encounter;
