//! Roster entity - The creatures chosen for an encounter
//!
//! The roster keeps its total encounter value up to date incrementally:
//! every mutation adjusts the total by the difference it makes to a single
//! entry's contribution instead of rescanning the whole roster.
//!
//! # Invariants
//! - At most one entry per creature id; repeated adds grow that entry
//! - Minion entries hold at least 4 creatures, all others at least 1
//! - No entry holds more than `MAX_ENTRY_QUANTITY` creatures
//! - `total_value` equals the sum of every entry's contribution
//! - A rejected mutation leaves the roster exactly as it was

use std::sync::Arc;

use crate::domain::entities::CreatureDefinition;
use crate::domain::value_objects::CreatureId;

/// Largest quantity a single roster entry may hold
pub const MAX_ENTRY_QUANTITY: u32 = 999;

/// One creature type in the roster together with how many are present
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    creature: Arc<CreatureDefinition>,
    quantity: u32,
    contribution: u32,
}

impl RosterEntry {
    pub fn creature(&self) -> &CreatureDefinition {
        &self.creature
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// This entry's share of the roster's total value
    pub fn contribution(&self) -> u32 {
        self.contribution
    }
}

/// Errors raised by roster mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Roster index {index} out of bounds (roster has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("A roster entry holds at most {max} creatures")]
    QuantityLimit { max: u32 },

    #[error("Encounter value too large")]
    ValueOverflow,
}

/// Ordered set of creatures in an encounter with a running total value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    total_value: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position_of(&self, id: &CreatureId) -> Option<usize> {
        self.entries.iter().position(|e| &e.creature.id == id)
    }

    /// Total value summed from scratch over every entry, or `None` if the
    /// sum doesn't fit in a `u32`
    pub fn recomputed_total(&self) -> Option<u32> {
        self.entries.iter().try_fold(0u32, |total, entry| {
            total.checked_add(entry.creature.value_of(entry.quantity)?)
        })
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Add one batch of a creature, returning the index of its entry.
    ///
    /// A creature already in the roster has its quantity raised by its
    /// organization's add amount; otherwise a new entry is appended holding
    /// exactly that amount.
    pub fn add(&mut self, creature: Arc<CreatureDefinition>) -> Result<usize, RosterError> {
        let amount = creature.organization.add_amount();

        let index = match self.position_of(&creature.id) {
            Some(index) => {
                let quantity = self.entries[index]
                    .quantity
                    .checked_add(amount)
                    .filter(|q| *q <= MAX_ENTRY_QUANTITY)
                    .ok_or(RosterError::QuantityLimit {
                        max: MAX_ENTRY_QUANTITY,
                    })?;
                self.resize(index, quantity)?;
                index
            }
            None => {
                let contribution = creature.value_of(amount).ok_or(RosterError::ValueOverflow)?;
                self.total_value = self
                    .total_value
                    .checked_add(contribution)
                    .ok_or(RosterError::ValueOverflow)?;
                self.entries.push(RosterEntry {
                    creature,
                    quantity: amount,
                    contribution,
                });
                self.entries.len() - 1
            }
        };

        self.check_total();
        Ok(index)
    }

    /// Remove the entry at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Result<RosterEntry, RosterError> {
        self.check_index(index)?;

        self.total_value -= self.entries[index].contribution;
        let entry = self.entries.remove(index);

        self.check_total();
        Ok(entry)
    }

    /// Set the quantity of the entry at `index`, returning the quantity
    /// actually stored after pulling it between the organization's floor
    /// and `MAX_ENTRY_QUANTITY`
    pub fn set_quantity(&mut self, index: usize, requested: u32) -> Result<u32, RosterError> {
        self.check_index(index)?;

        let floor = self.entries[index].creature.organization.quantity_floor();
        let quantity = requested.max(floor).min(MAX_ENTRY_QUANTITY);
        self.resize(index, quantity)?;

        self.check_total();
        Ok(quantity)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_value = 0;
    }

    /// Move the entry at `index` to `quantity`, adjusting the total by the
    /// change in its contribution. Nothing is written unless both the new
    /// contribution and the new total fit.
    fn resize(&mut self, index: usize, quantity: u32) -> Result<(), RosterError> {
        let entry = &self.entries[index];
        let contribution = entry
            .creature
            .value_of(quantity)
            .ok_or(RosterError::ValueOverflow)?;
        let total_value = (self.total_value - entry.contribution)
            .checked_add(contribution)
            .ok_or(RosterError::ValueOverflow)?;

        let entry = &mut self.entries[index];
        entry.quantity = quantity;
        entry.contribution = contribution;
        self.total_value = total_value;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index >= self.len() {
            return Err(RosterError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn check_total(&self) {
        debug_assert_eq!(
            Some(self.total_value),
            self.recomputed_total(),
            "roster total drifted from its entries"
        );
    }
}
