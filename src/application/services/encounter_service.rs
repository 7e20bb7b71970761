//! Encounter Service - Application service for drafting encounters
//!
//! Encounter drafts live in memory for the lifetime of the process. Every
//! mutation is applied and its result snapshotted under the same write
//! lock, so a caller never sees a total value or difficulty from before
//! its own change.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::CatalogPort;
use crate::domain::aggregates::Encounter;
use crate::domain::entities::{PartyConfig, RosterError};
use crate::domain::services::{CompositionAnalyzer, CompositionReport};
use crate::domain::value_objects::{AnalysisSettings, CreatureId, EncounterId};

/// Errors raised by encounter use cases
#[derive(Debug, thiserror::Error)]
pub enum EncounterServiceError {
    #[error("Encounter not found: {0}")]
    NotFound(EncounterId),

    #[error("Creature not found in catalog: {0}")]
    CreatureNotFound(CreatureId),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

pub type Result<T> = std::result::Result<T, EncounterServiceError>;

/// Request to create a new encounter draft
#[derive(Debug, Clone, Default)]
pub struct CreateEncounterRequest {
    pub name: Option<String>,
    pub party: Option<PartyUpdate>,
}

/// Raw party edits; missing fields keep their current value and present
/// ones are pulled into range before reaching the domain
#[derive(Debug, Clone, Copy, Default)]
pub struct PartyUpdate {
    pub hero_count: Option<i64>,
    pub hero_level: Option<i64>,
    pub victories: Option<i64>,
}

impl PartyUpdate {
    pub fn apply(&self, current: PartyConfig) -> PartyConfig {
        PartyConfig::clamped(
            self.hero_count.unwrap_or(i64::from(current.hero_count)),
            self.hero_level.unwrap_or(i64::from(current.hero_level)),
            self.victories.unwrap_or(i64::from(current.victories)),
        )
    }
}

/// An encounter together with its composition analysis
#[derive(Debug, Clone)]
pub struct EncounterAnalysis {
    pub encounter: Encounter,
    pub report: CompositionReport,
}

/// Encounter service trait defining the application use cases
#[async_trait]
pub trait EncounterService: Send + Sync {
    /// Create a new, empty encounter draft
    async fn create_encounter(&self, request: CreateEncounterRequest) -> Encounter;

    /// List all encounter drafts, most recently updated first
    async fn list_encounters(&self) -> Vec<Encounter>;

    async fn get_encounter(&self, id: EncounterId) -> Result<Encounter>;

    async fn delete_encounter(&self, id: EncounterId) -> Result<()>;

    /// Apply party edits and return the recomputed encounter
    async fn update_party(&self, id: EncounterId, update: PartyUpdate) -> Result<Encounter>;

    /// Add one batch of a catalog creature to the roster
    async fn add_creature(&self, id: EncounterId, creature_id: &CreatureId) -> Result<Encounter>;

    /// Remove the roster entry at `index`
    async fn remove_creature(&self, id: EncounterId, index: usize) -> Result<Encounter>;

    /// Set the quantity of the roster entry at `index`
    async fn set_quantity(&self, id: EncounterId, index: usize, quantity: u32)
        -> Result<Encounter>;

    /// Empty the roster
    async fn clear_roster(&self, id: EncounterId) -> Result<Encounter>;

    /// Analyze the current composition of an encounter
    async fn analyze(&self, id: EncounterId) -> Result<EncounterAnalysis>;

    /// Settings used when flagging outlevelled creatures
    fn analysis_settings(&self) -> AnalysisSettings;
}

/// In-memory implementation of EncounterService
pub struct EncounterServiceImpl {
    catalog: Arc<dyn CatalogPort>,
    analyzer: CompositionAnalyzer,
    encounters: RwLock<HashMap<EncounterId, Encounter>>,
}

impl EncounterServiceImpl {
    pub fn new(catalog: Arc<dyn CatalogPort>, settings: AnalysisSettings) -> Self {
        Self {
            catalog,
            analyzer: CompositionAnalyzer::new(settings),
            encounters: RwLock::new(HashMap::new()),
        }
    }

    /// Run `mutate` against an encounter under the write lock and return
    /// the encounter as it stands afterwards
    async fn mutate<F>(&self, id: EncounterId, mutate: F) -> Result<Encounter>
    where
        F: FnOnce(&mut Encounter) -> Result<()> + Send,
    {
        let mut encounters = self.encounters.write().await;
        let encounter = encounters
            .get_mut(&id)
            .ok_or(EncounterServiceError::NotFound(id))?;

        mutate(encounter)?;

        debug!(
            encounter_id = %id,
            capacity = encounter.capacity(),
            total_value = encounter.total_value(),
            difficulty = %encounter.difficulty(),
            "Recomputed encounter"
        );
        Ok(encounter.clone())
    }
}

#[async_trait]
impl EncounterService for EncounterServiceImpl {
    #[instrument(skip(self))]
    async fn create_encounter(&self, request: CreateEncounterRequest) -> Encounter {
        let party = request
            .party
            .map(|update| update.apply(PartyConfig::default()))
            .unwrap_or_default();
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Untitled Encounter".to_string());

        let encounter = Encounter::new(name, party);
        info!(encounter_id = %encounter.id(), "Created encounter: {}", encounter.name());

        self.encounters
            .write()
            .await
            .insert(encounter.id(), encounter.clone());
        encounter
    }

    async fn list_encounters(&self) -> Vec<Encounter> {
        let mut encounters: Vec<Encounter> =
            self.encounters.read().await.values().cloned().collect();
        encounters.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        encounters
    }

    async fn get_encounter(&self, id: EncounterId) -> Result<Encounter> {
        self.encounters
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(EncounterServiceError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete_encounter(&self, id: EncounterId) -> Result<()> {
        self.encounters
            .write()
            .await
            .remove(&id)
            .ok_or(EncounterServiceError::NotFound(id))?;

        info!(encounter_id = %id, "Deleted encounter");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_party(&self, id: EncounterId, update: PartyUpdate) -> Result<Encounter> {
        self.mutate(id, |encounter| {
            let party = update.apply(*encounter.party());
            encounter.set_party(party);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self, creature_id), fields(creature_id = %creature_id))]
    async fn add_creature(&self, id: EncounterId, creature_id: &CreatureId) -> Result<Encounter> {
        let creature = self
            .catalog
            .get(creature_id)
            .ok_or_else(|| EncounterServiceError::CreatureNotFound(creature_id.clone()))?;

        self.mutate(id, |encounter| {
            let index = encounter.add_creature(creature).inspect_err(|e| {
                warn!(error = %e, "Rejected roster addition");
            })?;
            debug!(
                index,
                quantity = encounter.roster().entries()[index].quantity(),
                "Added creature to roster"
            );
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_creature(&self, id: EncounterId, index: usize) -> Result<Encounter> {
        self.mutate(id, |encounter| {
            let removed = encounter.remove_creature(index).inspect_err(|e| {
                warn!(error = %e, "Rejected roster removal");
            })?;
            debug!(creature = %removed.creature().name, "Removed creature from roster");
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn set_quantity(
        &self,
        id: EncounterId,
        index: usize,
        quantity: u32,
    ) -> Result<Encounter> {
        self.mutate(id, |encounter| {
            let applied = encounter.set_quantity(index, quantity).inspect_err(|e| {
                warn!(error = %e, "Rejected quantity change");
            })?;
            if applied != quantity {
                debug!(requested = quantity, applied, "Raised quantity to organization floor");
            }
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn clear_roster(&self, id: EncounterId) -> Result<Encounter> {
        self.mutate(id, |encounter| {
            if encounter.roster().is_empty() {
                debug!("Roster already empty");
            }
            encounter.clear_roster();
            Ok(())
        })
        .await
    }

    async fn analyze(&self, id: EncounterId) -> Result<EncounterAnalysis> {
        let encounters = self.encounters.read().await;
        let encounter = encounters
            .get(&id)
            .ok_or(EncounterServiceError::NotFound(id))?;

        let report = self.analyzer.analyze(encounter.party(), encounter.roster());
        Ok(EncounterAnalysis {
            encounter: encounter.clone(),
            report,
        })
    }

    fn analysis_settings(&self) -> AnalysisSettings {
        *self.analyzer.settings()
    }
}
