use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::CreatureResponseDto;
use crate::application::services::{CreateEncounterRequest, EncounterAnalysis, PartyUpdate};
use crate::domain::aggregates::Encounter;
use crate::domain::entities::{PartyConfig, RosterEntry, MAX_ENTRY_QUANTITY};
use crate::domain::services::CompositionReport;
use crate::domain::value_objects::{AnalysisSettings, DifficultyTier};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateEncounterRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub party: Option<PartyRequestDto>,
}

impl From<CreateEncounterRequestDto> for CreateEncounterRequest {
    fn from(dto: CreateEncounterRequestDto) -> Self {
        Self {
            name: dto.name,
            party: dto.party.map(Into::into),
        }
    }
}

/// Party edit; any integer is accepted and clamped into range
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PartyRequestDto {
    #[serde(default)]
    pub hero_count: Option<i64>,
    #[serde(default)]
    pub hero_level: Option<i64>,
    #[serde(default)]
    pub victories: Option<i64>,
}

impl From<PartyRequestDto> for PartyUpdate {
    fn from(dto: PartyRequestDto) -> Self {
        Self {
            hero_count: dto.hero_count,
            hero_level: dto.hero_level,
            victories: dto.victories,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCreatureRequestDto {
    pub creature_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequestDto {
    pub quantity: i64,
}

impl UpdateQuantityRequestDto {
    /// Requested quantity pulled into `0..=MAX_ENTRY_QUANTITY`; the roster
    /// applies its own organization floor
    pub fn requested(&self) -> u32 {
        self.quantity.clamp(0, i64::from(MAX_ENTRY_QUANTITY)) as u32
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PartyResponseDto {
    pub hero_count: u32,
    pub hero_level: u32,
    pub victories: u32,
    pub encounter_strength: u32,
    pub one_hero_strength: u32,
}

impl From<&PartyConfig> for PartyResponseDto {
    fn from(p: &PartyConfig) -> Self {
        Self {
            hero_count: p.hero_count,
            hero_level: p.hero_level,
            victories: p.victories,
            encounter_strength: p.capacity(),
            one_hero_strength: p.one_hero_strength(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DifficultyResponseDto {
    pub tier: DifficultyTier,
    pub display_name: String,
    pub color: String,
}

impl From<DifficultyTier> for DifficultyResponseDto {
    fn from(tier: DifficultyTier) -> Self {
        Self {
            tier,
            display_name: tier.display_name().to_string(),
            color: tier.display_color().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterEntryResponseDto {
    pub index: usize,
    pub creature: CreatureResponseDto,
    pub quantity: u32,
    pub min_quantity: u32,
    pub contribution: u32,
    pub is_high_level: bool,
}

impl RosterEntryResponseDto {
    fn new(index: usize, entry: &RosterEntry, hero_level: u32, settings: &AnalysisSettings) -> Self {
        let creature = entry.creature();
        Self {
            index,
            creature: creature.into(),
            quantity: entry.quantity(),
            min_quantity: creature.organization.quantity_floor(),
            contribution: entry.contribution(),
            is_high_level: settings.is_high_level(creature.level, hero_level),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EncounterResponseDto {
    pub id: String,
    pub name: String,
    pub party: PartyResponseDto,
    pub total_value: u32,
    pub difficulty: DifficultyResponseDto,
    /// Encounter value over encounter strength
    pub value_ratio: Option<f64>,
    pub creatures: Vec<RosterEntryResponseDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EncounterResponseDto {
    pub fn new(encounter: &Encounter, settings: &AnalysisSettings) -> Self {
        let hero_level = encounter.party().hero_level;
        Self {
            id: encounter.id().to_string(),
            name: encounter.name().to_string(),
            party: encounter.party().into(),
            total_value: encounter.total_value(),
            difficulty: encounter.difficulty().into(),
            value_ratio: encounter.value_ratio(),
            creatures: encounter
                .roster()
                .entries()
                .iter()
                .enumerate()
                .map(|(i, e)| RosterEntryResponseDto::new(i, e, hero_level, settings))
                .collect(),
            created_at: encounter.created_at(),
            updated_at: encounter.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EncounterSummaryResponseDto {
    pub id: String,
    pub name: String,
    pub encounter_strength: u32,
    pub total_value: u32,
    pub difficulty: DifficultyTier,
    pub creature_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl From<&Encounter> for EncounterSummaryResponseDto {
    fn from(e: &Encounter) -> Self {
        Self {
            id: e.id().to_string(),
            name: e.name().to_string(),
            encounter_strength: e.capacity(),
            total_value: e.total_value(),
            difficulty: e.difficulty(),
            creature_count: e
                .roster()
                .entries()
                .iter()
                .fold(0u32, |total, entry| total.saturating_add(entry.quantity())),
            updated_at: e.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EncounterAnalysisResponseDto {
    pub encounter_id: String,
    pub encounter_strength: u32,
    pub total_value: u32,
    pub difficulty: DifficultyResponseDto,
    pub value_ratio: Option<f64>,
    #[serde(flatten)]
    pub report: CompositionReport,
}

impl From<EncounterAnalysis> for EncounterAnalysisResponseDto {
    fn from(a: EncounterAnalysis) -> Self {
        Self {
            encounter_id: a.encounter.id().to_string(),
            encounter_strength: a.encounter.capacity(),
            total_value: a.encounter.total_value(),
            difficulty: a.encounter.difficulty().into(),
            value_ratio: a.encounter.value_ratio(),
            report: a.report,
        }
    }
}
