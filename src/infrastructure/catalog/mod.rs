//! Creature catalog adapter
//!
//! Loads creature definitions from a JSON array (camelCase keys) either
//! from a file on disk or from the catalog bundled into the binary, and
//! serves them read-only through `CatalogPort`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::outbound::CatalogPort;
use crate::domain::entities::CreatureDefinition;
use crate::domain::value_objects::CreatureId;

const BUNDLED_CATALOG: &str = include_str!("../../../data/creatures.json");

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate creature id in catalog: {0}")]
    DuplicateId(CreatureId),
}

/// Immutable, in-memory creature catalog
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    creatures: Vec<Arc<CreatureDefinition>>,
}

impl InMemoryCatalog {
    pub fn new(creatures: Vec<CreatureDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for creature in &creatures {
            if !seen.insert(&creature.id) {
                return Err(CatalogError::DuplicateId(creature.id.clone()));
            }
        }

        Ok(Self {
            creatures: creatures.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let creatures: Vec<CreatureDefinition> = serde_json::from_str(json)?;
        Self::new(creatures)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the engine
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Load from `path` if given, otherwise fall back to the bundled catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                tracing::info!("Loading creature catalog from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                tracing::info!("Using bundled creature catalog");
                Self::bundled()?
            }
        };

        tracing::info!("Catalog loaded with {} creatures", catalog.creatures.len());
        Ok(catalog)
    }
}

impl CatalogPort for InMemoryCatalog {
    fn creatures(&self) -> &[Arc<CreatureDefinition>] {
        &self.creatures
    }
}
