//! Creature entity - A catalog entry that can be placed into an encounter
//!
//! Creature definitions are owned by the catalog and never change once
//! loaded. Rosters hold shared references to them.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CreatureId, CreatureRole, Organization};

/// A creature as described by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDefinition {
    pub id: CreatureId,
    pub name: String,
    /// Keyword tags such as "Goblinoid" or "Undead"
    pub types: Vec<String>,
    pub level: u32,
    /// Weight this creature contributes to an encounter's total value
    pub encounter_value: u32,
    pub organization: Organization,
    pub role: CreatureRole,
}

impl CreatureDefinition {
    /// Label for the catalog's add button
    pub fn add_label(&self) -> String {
        match self.organization.add_amount() {
            1 => "Add".to_string(),
            n => format!("Add {}", n),
        }
    }

    /// Encounter value of `quantity` of this creature, or `None` if it
    /// doesn't fit in a `u32`
    pub fn value_of(&self, quantity: u32) -> Option<u32> {
        self.encounter_value
            .checked_mul(self.organization.valued_units(quantity))
    }

    /// Case-insensitive substring match against the name or any type tag
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.types.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
impl CreatureDefinition {
    pub fn new(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        level: u32,
        encounter_value: u32,
        organization: Organization,
        role: CreatureRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            types: Vec::new(),
            level,
            encounter_value,
            organization,
            role,
        }
    }

    pub fn with_type(mut self, creature_type: impl Into<String>) -> Self {
        self.types.push(creature_type.into());
        self
    }
}
