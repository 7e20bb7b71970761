//! Encounter difficulty tiers and the classifier that produces them

use serde::{Deserialize, Serialize};

/// Encounter strength contributed by one hero of the given level
pub fn one_hero_strength(hero_level: u32) -> u32 {
    hero_level.saturating_mul(2).saturating_add(4)
}

/// Discrete challenge level of an encounter relative to the party
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Trivial,
    Easy,
    Standard,
    Hard,
    Extreme,
}

impl Default for DifficultyTier {
    fn default() -> Self {
        Self::Trivial
    }
}

impl DifficultyTier {
    /// Classify an encounter worth `total_value` against a party's
    /// encounter strength.
    ///
    /// The window one hero wide below `capacity` is easy; from `capacity`
    /// up to one hero above it (inclusive) is standard; up to three heroes
    /// above it (inclusive) is hard.
    pub fn classify(capacity: u32, total_value: u32, hero_level: u32) -> Self {
        let one_hero = one_hero_strength(hero_level);
        let three_heroes = one_hero.saturating_mul(3);

        // A capacity below one hero leaves nothing that is trivial.
        if total_value < capacity.saturating_sub(one_hero) {
            Self::Trivial
        } else if total_value < capacity {
            Self::Easy
        } else if total_value <= capacity.saturating_add(one_hero) {
            Self::Standard
        } else if total_value <= capacity.saturating_add(three_heroes) {
            Self::Hard
        } else {
            Self::Extreme
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Trivial => "Trivial",
            Self::Easy => "Easy",
            Self::Standard => "Standard",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }

    /// Display color used by clients for the tier badge
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Trivial => "#4ade80",
            Self::Easy => "#22c55e",
            Self::Standard => "#eab308",
            Self::Hard => "#f97316",
            Self::Extreme => "#ef4444",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
