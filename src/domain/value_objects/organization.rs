//! Creature organization - How a creature groups up on the battlefield
//!
//! The organization decides three things: how a roster quantity is valued,
//! how many tactical groups a number of creatures forms, and how many of
//! those groups a party of heroes should face.

use serde::{Deserialize, Serialize};

/// Tactical grouping category of a creature
///
/// Serialized as its lowercase key. Keys the balancing rules don't know are
/// kept verbatim in `Other` so reports can still name them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Organization {
    Minion,
    Horde,
    Platoon,
    Elite,
    Leader,
    Solo,
    Other(String),
}

impl Organization {
    pub const KNOWN: [Organization; 6] = [
        Self::Minion,
        Self::Horde,
        Self::Platoon,
        Self::Elite,
        Self::Leader,
        Self::Solo,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Minion => "minion",
            Self::Horde => "horde",
            Self::Platoon => "platoon",
            Self::Elite => "elite",
            Self::Leader => "leader",
            Self::Solo => "solo",
            Self::Other(key) => key,
        }
    }

    /// Quantity added to a roster by a single "add" action
    pub fn add_amount(&self) -> u32 {
        match self {
            Self::Minion => 4,
            _ => 1,
        }
    }

    /// Smallest quantity a roster entry of this organization may hold
    pub fn quantity_floor(&self) -> u32 {
        match self {
            Self::Minion => 4,
            _ => 1,
        }
    }

    /// Number of encounter-value units a quantity of creatures costs.
    ///
    /// Minions are paid for per squad of four, a partial squad costing a
    /// full one. Everything else is paid for per creature.
    pub fn valued_units(&self, quantity: u32) -> u32 {
        match self {
            Self::Minion => quantity.div_ceil(4),
            _ => quantity,
        }
    }

    /// Number of creatures that make up one tactical group
    pub fn group_size(&self) -> u32 {
        match self {
            Self::Minion => 4,
            Self::Horde => 2,
            _ => 1,
        }
    }

    /// Number of tactical groups a creature count represents, rounding up
    pub fn organization_count(&self, creature_count: u32) -> u32 {
        creature_count.div_ceil(self.group_size())
    }

    /// Recommended number of groups per hero for this organization
    pub fn guideline(&self) -> OrganizationGuideline {
        match self {
            Self::Minion => OrganizationGuideline {
                min_orgs_per_hero: 0.5,
                max_orgs_per_hero: 2.0,
                min_creatures_per_org: 4,
                max_creatures_per_org: 8,
                description: "≈1-2 minion groups per hero (4-8 minions per group)",
            },
            Self::Horde => OrganizationGuideline {
                min_orgs_per_hero: 0.5,
                max_orgs_per_hero: 1.0,
                min_creatures_per_org: 2,
                max_creatures_per_org: 2,
                description: "≈1 horde per hero (2 creatures per horde)",
            },
            Self::Platoon => OrganizationGuideline {
                min_orgs_per_hero: 0.5,
                max_orgs_per_hero: 1.0,
                min_creatures_per_org: 1,
                max_creatures_per_org: 1,
                description: "≈1 platoon per hero (1 creature per platoon)",
            },
            Self::Elite => OrganizationGuideline {
                min_orgs_per_hero: 0.25,
                max_orgs_per_hero: 0.5,
                min_creatures_per_org: 1,
                max_creatures_per_org: 1,
                description: "≈0.5 elite per hero (1 creature per elite)",
            },
            Self::Leader => OrganizationGuideline {
                min_orgs_per_hero: 0.25,
                max_orgs_per_hero: 0.5,
                min_creatures_per_org: 1,
                max_creatures_per_org: 1,
                description: "≈0.5 leader per hero (1 creature per leader)",
            },
            Self::Solo => OrganizationGuideline {
                min_orgs_per_hero: 0.17,
                max_orgs_per_hero: 0.25,
                min_creatures_per_org: 1,
                max_creatures_per_org: 1,
                description: "≈0.25 solo per hero (1 creature per solo)",
            },
            Self::Other(_) => OrganizationGuideline {
                min_orgs_per_hero: 0.0,
                max_orgs_per_hero: 1.0,
                min_creatures_per_org: 1,
                max_creatures_per_org: 1,
                description: "Varies by organization",
            },
        }
    }
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Organization {
    fn from(key: &str) -> Self {
        let key = key.trim();
        Self::KNOWN
            .into_iter()
            .find(|org| org.as_str().eq_ignore_ascii_case(key))
            .unwrap_or_else(|| Self::Other(key.to_string()))
    }
}

impl From<String> for Organization {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

impl From<Organization> for String {
    fn from(org: Organization) -> Self {
        match org {
            Organization::Other(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

/// Recommended per-hero range for one organization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrganizationGuideline {
    pub min_orgs_per_hero: f64,
    pub max_orgs_per_hero: f64,
    pub min_creatures_per_org: u32,
    pub max_creatures_per_org: u32,
    pub description: &'static str,
}

impl OrganizationGuideline {
    /// Judge a groups-per-hero ratio against this range (bounds inclusive)
    pub fn verdict(&self, orgs_per_hero: f64) -> BalanceVerdict {
        if orgs_per_hero < self.min_orgs_per_hero {
            BalanceVerdict::TooFew
        } else if orgs_per_hero > self.max_orgs_per_hero {
            BalanceVerdict::TooMany
        } else {
            BalanceVerdict::Balanced
        }
    }
}

/// Outcome of comparing an organization's presence to its guideline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceVerdict {
    TooFew,
    Balanced,
    TooMany,
}

impl BalanceVerdict {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TooFew => "too few",
            Self::Balanced => "balanced",
            Self::TooMany => "too many",
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minion_squads_round_up() {
        assert_eq!(Organization::Minion.valued_units(4), 1);
        assert_eq!(Organization::Minion.valued_units(5), 2);
        assert_eq!(Organization::Minion.valued_units(8), 2);
        assert_eq!(Organization::Minion.valued_units(9), 3);
    }

    #[test]
    fn test_non_minions_valued_per_creature() {
        assert_eq!(Organization::Horde.valued_units(3), 3);
        assert_eq!(Organization::Solo.valued_units(1), 1);
    }

    #[test]
    fn test_organization_count() {
        assert_eq!(Organization::Minion.organization_count(5), 2);
        assert_eq!(Organization::Horde.organization_count(3), 2);
        assert_eq!(Organization::Horde.organization_count(4), 2);
        assert_eq!(Organization::Elite.organization_count(3), 3);
    }

    #[test]
    fn test_quantity_floor_and_add_amount() {
        assert_eq!(Organization::Minion.quantity_floor(), 4);
        assert_eq!(Organization::Minion.add_amount(), 4);
        assert_eq!(Organization::Platoon.quantity_floor(), 1);
        assert_eq!(Organization::Leader.add_amount(), 1);
    }

    #[test]
    fn test_guideline_verdict_bounds() {
        let minion = Organization::Minion.guideline();
        assert_eq!(minion.verdict(0.25), BalanceVerdict::TooFew);
        assert_eq!(minion.verdict(0.5), BalanceVerdict::Balanced);
        assert_eq!(minion.verdict(1.0), BalanceVerdict::Balanced);
        assert_eq!(minion.verdict(2.0), BalanceVerdict::Balanced);
        assert_eq!(minion.verdict(3.0), BalanceVerdict::TooMany);
    }

    #[test]
    fn test_unknown_organization_keeps_its_key() {
        let org: Organization = serde_json::from_str("\"swarm\"").unwrap();
        assert_eq!(org, Organization::Other("swarm".to_string()));
        assert_eq!(org.to_string(), "swarm");
        assert_eq!(org.group_size(), 1);
        assert_eq!(org.guideline().min_orgs_per_hero, 0.0);
        assert_eq!(org.guideline().max_orgs_per_hero, 1.0);
        assert_eq!(serde_json::to_string(&org).unwrap(), "\"swarm\"");
    }

    #[test]
    fn test_known_keys_ignore_case() {
        assert_eq!(Organization::from("Elite"), Organization::Elite);
        assert_eq!(Organization::from(" minion "), Organization::Minion);
        assert_eq!(
            serde_json::to_string(&Organization::Horde).unwrap(),
            "\"horde\""
        );
    }
}
