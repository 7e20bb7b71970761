//! Analysis tuning settings value object
//!
//! The thresholds here are domain-tuning constants with no derivation of
//! their own, so they live as data that can be overridden from the
//! environment rather than being baked into the analyzer.

use serde::{Deserialize, Serialize};

/// Tunable constants used by the composition analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// A creature more than this many levels above the heroes is flagged
    pub high_level_margin: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            high_level_margin: 2,
        }
    }
}

impl AnalysisSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            high_level_margin: env_or("ENCOUNTER_HIGH_LEVEL_MARGIN", defaults.high_level_margin),
        }
    }

    /// Whether a creature of `creature_level` outclasses heroes of `hero_level`
    pub fn is_high_level(&self, creature_level: u32, hero_level: u32) -> bool {
        creature_level > hero_level.saturating_add(self.high_level_margin)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
