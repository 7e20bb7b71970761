//! Catalog port - Read-only access to the creature catalog
//!
//! The catalog is loaded once at startup and never mutated, so access is
//! synchronous and hands out shared references.

use std::sync::Arc;

use crate::domain::entities::CreatureDefinition;
use crate::domain::value_objects::CreatureId;

/// Source of creature definitions
pub trait CatalogPort: Send + Sync {
    /// Every creature in catalog order
    fn creatures(&self) -> &[Arc<CreatureDefinition>];

    /// Look up a creature by its catalog id
    fn get(&self, id: &CreatureId) -> Option<Arc<CreatureDefinition>> {
        self.creatures().iter().find(|c| &c.id == id).cloned()
    }
}
