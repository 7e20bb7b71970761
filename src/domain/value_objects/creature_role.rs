//! Creature combat role - Informational tag, never used in valuation

use serde::{Deserialize, Serialize};

/// How a creature behaves in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureRole {
    Ambusher,
    Artillery,
    Brute,
    Controller,
    Defender,
    Harrier,
    Hexer,
    Leader,
    Support,
    Mount,
    Solo,
    #[serde(other)]
    Other,
}

impl CreatureRole {
    pub const ALL: [CreatureRole; 12] = [
        Self::Ambusher,
        Self::Artillery,
        Self::Brute,
        Self::Controller,
        Self::Defender,
        Self::Harrier,
        Self::Hexer,
        Self::Leader,
        Self::Support,
        Self::Mount,
        Self::Solo,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambusher => "ambusher",
            Self::Artillery => "artillery",
            Self::Brute => "brute",
            Self::Controller => "controller",
            Self::Defender => "defender",
            Self::Harrier => "harrier",
            Self::Hexer => "hexer",
            Self::Leader => "leader",
            Self::Support => "support",
            Self::Mount => "mount",
            Self::Solo => "solo",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CreatureRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CreatureRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}
