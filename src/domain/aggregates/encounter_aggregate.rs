//! Encounter Aggregate - A party facing a roster of creatures
//!
//! All changes to an encounter's party or roster go through this aggregate
//! root, so the derived values it exposes (capacity, total value,
//! difficulty) always reflect the latest applied change.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{CreatureDefinition, PartyConfig, Roster, RosterEntry, RosterError};
use crate::domain::value_objects::{DifficultyTier, EncounterId};

/// The Encounter Aggregate Root
#[derive(Debug, Clone)]
pub struct Encounter {
    id: EncounterId,
    name: String,
    party: PartyConfig,
    roster: Roster,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Encounter {
    /// Create an empty encounter for a party
    pub fn new(name: impl Into<String>, party: PartyConfig) -> Self {
        let now = Utc::now();
        Self {
            id: EncounterId::new(),
            name: name.into(),
            party,
            roster: Roster::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> EncounterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn party(&self) -> &PartyConfig {
        &self.party
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// The party's encounter strength
    pub fn capacity(&self) -> u32 {
        self.party.capacity()
    }

    /// Sum of every roster entry's encounter value
    pub fn total_value(&self) -> u32 {
        self.roster.total_value()
    }

    pub fn difficulty(&self) -> DifficultyTier {
        DifficultyTier::classify(self.capacity(), self.total_value(), self.party.hero_level)
    }

    /// Encounter value over encounter strength, if the party has any strength
    pub fn value_ratio(&self) -> Option<f64> {
        match self.capacity() {
            0 => None,
            capacity => Some(f64::from(self.total_value()) / f64::from(capacity)),
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Replace the party configuration wholesale
    pub fn set_party(&mut self, party: PartyConfig) {
        self.party = party;
        self.touch();
    }

    /// Add one batch of a creature, returning the index of its roster entry
    pub fn add_creature(
        &mut self,
        creature: Arc<CreatureDefinition>,
    ) -> Result<usize, RosterError> {
        let index = self.roster.add(creature)?;
        self.touch();
        Ok(index)
    }

    pub fn remove_creature(&mut self, index: usize) -> Result<RosterEntry, RosterError> {
        let entry = self.roster.remove(index)?;
        self.touch();
        Ok(entry)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<u32, RosterError> {
        let applied = self.roster.set_quantity(index, quantity)?;
        self.touch();
        Ok(applied)
    }

    pub fn clear_roster(&mut self) {
        self.roster.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
