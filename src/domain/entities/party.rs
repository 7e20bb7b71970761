//! Party entity - The heroes an encounter is balanced against

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::one_hero_strength;

pub const MIN_HERO_LEVEL: u32 = 1;
pub const MAX_HERO_LEVEL: u32 = 10;
pub const MAX_HERO_COUNT: u32 = 100;
pub const MAX_VICTORIES: u32 = 100;

/// Party configuration as edited by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyConfig {
    /// Number of heroes, retainers included
    pub hero_count: u32,
    pub hero_level: u32,
    /// Victories earned since the party's last respite
    pub victories: u32,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self::new(4, 3, 0)
    }
}

impl PartyConfig {
    pub fn new(hero_count: u32, hero_level: u32, victories: u32) -> Self {
        Self {
            hero_count,
            hero_level,
            victories,
        }
    }

    /// Build a party from raw user input, pulling every field into range
    pub fn clamped(hero_count: i64, hero_level: i64, victories: i64) -> Self {
        Self::new(
            clamp_to_u32(hero_count, 1, MAX_HERO_COUNT),
            clamp_to_u32(hero_level, MIN_HERO_LEVEL, MAX_HERO_LEVEL),
            clamp_to_u32(victories, 0, MAX_VICTORIES),
        )
    }

    /// The party's encounter strength.
    ///
    /// Each hero contributes one hero's worth of strength, and every two
    /// victories add one more hero's worth on top. Saturates at
    /// `u32::MAX` for parties far outside the clamped input range.
    pub fn capacity(&self) -> u32 {
        let heroes = self.hero_count.saturating_add(self.victories / 2);
        heroes.saturating_mul(self.one_hero_strength())
    }

    pub fn one_hero_strength(&self) -> u32 {
        one_hero_strength(self.hero_level)
    }
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}
