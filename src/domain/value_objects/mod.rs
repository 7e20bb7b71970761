//! Value objects - Immutable objects defined by their attributes

mod creature_role;
mod difficulty;
mod ids;
mod organization;
mod settings;

pub use creature_role::CreatureRole;
pub use difficulty::{one_hero_strength, DifficultyTier};
pub use ids::*;
pub use organization::{BalanceVerdict, Organization, OrganizationGuideline};
pub use settings::AnalysisSettings;
