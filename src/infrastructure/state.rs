//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::CatalogPort;
use crate::application::services::{CatalogService, EncounterService, EncounterServiceImpl};
use crate::infrastructure::catalog::InMemoryCatalog;
use crate::infrastructure::config::AppConfig;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub catalog_service: CatalogService,
    pub encounter_service: Arc<dyn EncounterService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = InMemoryCatalog::load(config.catalog_path.as_deref())
            .context("Failed to load creature catalog")?;

        Ok(Self::with_catalog(config, Arc::new(catalog)))
    }

    /// Build state around an already loaded catalog
    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn CatalogPort>) -> Self {
        let catalog_service = CatalogService::new(catalog.clone());
        let encounter_service = Arc::new(EncounterServiceImpl::new(catalog, config.analysis));

        Self {
            config,
            catalog_service,
            encounter_service,
        }
    }
}
