//! Domain entities - Core business objects with identity

mod creature;
mod party;
mod roster;

pub use creature::CreatureDefinition;
pub use party::PartyConfig;
pub use roster::{Roster, RosterEntry, RosterError, MAX_ENTRY_QUANTITY};
