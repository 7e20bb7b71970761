//! Domain services - Pure business logic spanning several entities

mod composition_analyzer;

pub use composition_analyzer::{CompositionAnalyzer, CompositionReport};
