//! Catalog Service - Search and filter over the creature catalog
//!
//! Backs the "add creatures" panel: free-text search on name or type plus
//! exact filters on type, organization, level and role, and the distinct
//! values of each filterable field for populating dropdowns.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ports::outbound::CatalogPort;
use crate::domain::entities::CreatureDefinition;
use crate::domain::value_objects::{CreatureId, CreatureRole, Organization};

/// Catalog filter; `None` on a field means "all"
#[derive(Debug, Clone, Default)]
pub struct CreatureFilter {
    /// Case-insensitive substring of the name or any type tag
    pub search: Option<String>,
    /// Exact type tag
    pub creature_type: Option<String>,
    pub organization: Option<Organization>,
    pub level: Option<u32>,
    pub role: Option<CreatureRole>,
}

impl CreatureFilter {
    pub fn matches(&self, creature: &CreatureDefinition) -> bool {
        let search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => creature.matches_text(term),
        };

        search
            && self
                .creature_type
                .as_ref()
                .map_or(true, |t| creature.types.iter().any(|ct| ct == t))
            && self
                .organization
                .as_ref()
                .map_or(true, |o| &creature.organization == o)
            && self.level.map_or(true, |l| creature.level == l)
            && self.role.map_or(true, |r| creature.role == r)
    }

    /// Number of filters that narrow the result
    pub fn active_count(&self) -> usize {
        [
            self.search.as_deref().is_some_and(|s| !s.trim().is_empty()),
            self.creature_type.is_some(),
            self.organization.is_some(),
            self.level.is_some(),
            self.role.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Distinct filterable values present in the catalog, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFacets {
    pub types: Vec<String>,
    pub organizations: Vec<Organization>,
    pub levels: Vec<u32>,
    pub roles: Vec<CreatureRole>,
}

/// Read-only query service over the catalog
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogPort>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub fn get(&self, id: &CreatureId) -> Option<Arc<CreatureDefinition>> {
        self.catalog.get(id)
    }

    pub fn len(&self) -> usize {
        self.catalog.creatures().len()
    }

    #[instrument(skip(self))]
    pub fn search(&self, filter: &CreatureFilter) -> Vec<Arc<CreatureDefinition>> {
        let results: Vec<_> = self
            .catalog
            .creatures()
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();

        debug!(
            active_filters = filter.active_count(),
            results = results.len(),
            "Searched creature catalog"
        );
        results
    }

    pub fn facets(&self) -> CatalogFacets {
        let mut facets = CatalogFacets::default();

        for creature in self.catalog.creatures() {
            for creature_type in &creature.types {
                push_unique(&mut facets.types, creature_type.clone());
            }
            push_unique(&mut facets.organizations, creature.organization.clone());
            push_unique(&mut facets.levels, creature.level);
            push_unique(&mut facets.roles, creature.role);
        }

        facets
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
