//! Composition analysis - Advisory statistics about an encounter's roster
//!
//! Turns a roster into per-organization and per-role tables, judges each
//! organization against its recommended groups-per-hero range, and flags
//! creatures that outlevel the party. The analysis only reads the party
//! and roster; it never changes them.
//!
//! Callers must ensure `hero_count >= 1`. Per-hero ratios are plain
//! divisions by the hero count.

use serde::Serialize;

use crate::domain::entities::{PartyConfig, Roster};
use crate::domain::value_objects::{
    AnalysisSettings, BalanceVerdict, CreatureId, CreatureRole, Organization,
    OrganizationGuideline,
};

/// Statistics for one organization present in the roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationStats {
    pub organization: Organization,
    pub creature_count: u32,
    /// Number of tactical groups the creatures form
    pub organization_count: u32,
    pub creatures_per_hero: f64,
    pub organizations_per_hero: f64,
    /// Percentage of all groups in the roster
    pub share: f64,
    pub guideline: OrganizationGuideline,
    pub verdict: BalanceVerdict,
}

/// Creature count for one combat role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleStats {
    pub role: CreatureRole,
    pub creature_count: u32,
    /// Percentage of all creatures in the roster
    pub share: f64,
}

/// A roster entry whose creature outlevels the party
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighLevelWarning {
    pub creature_id: CreatureId,
    pub name: String,
    pub level: u32,
    pub quantity: u32,
    pub hero_level: u32,
}

/// Full composition analysis of an encounter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionReport {
    pub organizations: Vec<OrganizationStats>,
    pub roles: Vec<RoleStats>,
    pub high_level_warnings: Vec<HighLevelWarning>,
    pub total_creatures: u32,
    pub total_organizations: u32,
    /// One line per organization outside its recommended range
    pub recommendations: Vec<String>,
    /// True when every organization present is within its range
    pub balanced: bool,
}

/// Domain service producing composition reports
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionAnalyzer {
    settings: AnalysisSettings,
}

impl CompositionAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn analyze(&self, party: &PartyConfig, roster: &Roster) -> CompositionReport {
        let heroes = f64::from(party.hero_count);

        // (organization, creature count) and (role, creature count), in
        // order of first appearance
        let mut by_organization: Vec<(Organization, u32)> = Vec::new();
        let mut by_role: Vec<(CreatureRole, u32)> = Vec::new();

        for entry in roster.entries() {
            let creature = entry.creature();
            tally(&mut by_organization, creature.organization.clone(), entry.quantity());
            tally(&mut by_role, creature.role, entry.quantity());
        }

        let total_creatures = by_role
            .iter()
            .fold(0u32, |total, (_, count)| total.saturating_add(*count));
        let total_organizations = by_organization.iter().fold(0u32, |total, (org, count)| {
            total.saturating_add(org.organization_count(*count))
        });

        let organizations: Vec<OrganizationStats> = by_organization
            .into_iter()
            .map(|(organization, creature_count)| {
                let organization_count = organization.organization_count(creature_count);
                let organizations_per_hero = f64::from(organization_count) / heroes;
                let guideline = organization.guideline();
                OrganizationStats {
                    organization,
                    creature_count,
                    organization_count,
                    creatures_per_hero: f64::from(creature_count) / heroes,
                    organizations_per_hero,
                    share: percentage(organization_count, total_organizations),
                    guideline,
                    verdict: guideline.verdict(organizations_per_hero),
                }
            })
            .collect();

        let roles = by_role
            .into_iter()
            .map(|(role, creature_count)| RoleStats {
                role,
                creature_count,
                share: percentage(creature_count, total_creatures),
            })
            .collect();

        let high_level_warnings = roster
            .entries()
            .iter()
            .filter(|e| self.settings.is_high_level(e.creature().level, party.hero_level))
            .map(|e| HighLevelWarning {
                creature_id: e.creature().id.clone(),
                name: e.creature().name.clone(),
                level: e.creature().level,
                quantity: e.quantity(),
                hero_level: party.hero_level,
            })
            .collect();

        let recommendations: Vec<String> = organizations
            .iter()
            .filter(|stats| !stats.verdict.is_balanced())
            .map(|stats| {
                format!(
                    "{}: {} - {}",
                    stats.organization,
                    stats.verdict.display_name(),
                    stats.guideline.description
                )
            })
            .collect();

        CompositionReport {
            balanced: recommendations.is_empty(),
            organizations,
            roles,
            high_level_warnings,
            total_creatures,
            total_organizations,
            recommendations,
        }
    }
}

fn tally<K: PartialEq>(counts: &mut Vec<(K, u32)>, key: K, quantity: u32) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, count)) => *count = count.saturating_add(quantity),
        None => counts.push((key, quantity)),
    }
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::CreatureDefinition;

    fn creature(
        id: &str,
        level: u32,
        organization: Organization,
        role: CreatureRole,
    ) -> Arc<CreatureDefinition> {
        Arc::new(CreatureDefinition::new(
            id,
            format!("Creature {}", id),
            level,
            4,
            organization,
            role,
        ))
    }

    #[test]
    fn test_empty_roster_is_balanced() {
        let report = CompositionAnalyzer::default().analyze(&PartyConfig::default(), &Roster::new());

        assert!(report.organizations.is_empty());
        assert!(report.roles.is_empty());
        assert!(report.high_level_warnings.is_empty());
        assert_eq!(report.total_creatures, 0);
        assert!(report.balanced);
    }

    #[test]
    fn test_one_minion_group_per_hero_is_balanced() {
        let party = PartyConfig::new(4, 3, 0);
        let mut roster = Roster::new();
        roster.add(creature("rat", 1, Organization::Minion, CreatureRole::Harrier)).unwrap();
        roster.set_quantity(0, 16).unwrap();

        let report = CompositionAnalyzer::default().analyze(&party, &roster);
        let minions = &report.organizations[0];

        assert_eq!(minions.creature_count, 16);
        assert_eq!(minions.organization_count, 4);
        assert_eq!(minions.organizations_per_hero, 1.0);
        assert_eq!(minions.creatures_per_hero, 4.0);
        assert_eq!(minions.verdict, BalanceVerdict::Balanced);
        assert!(report.balanced);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_three_minion_groups_per_hero_is_too_many() {
        let party = PartyConfig::new(2, 3, 0);
        let mut roster = Roster::new();
        roster.add(creature("rat", 1, Organization::Minion, CreatureRole::Harrier)).unwrap();
        roster.set_quantity(0, 24).unwrap();

        let report = CompositionAnalyzer::default().analyze(&party, &roster);
        let minions = &report.organizations[0];

        assert_eq!(minions.organizations_per_hero, 3.0);
        assert_eq!(minions.verdict, BalanceVerdict::TooMany);
        assert!(!report.balanced);
        assert_eq!(
            report.recommendations,
            vec!["minion: too many - ≈1-2 minion groups per hero (4-8 minions per group)".to_string()]
        );
    }

    #[test]
    fn test_horde_groups_of_two_and_too_few_solo() {
        let party = PartyConfig::new(8, 3, 0);
        let mut roster = Roster::new();
        roster.add(creature("wolf", 1, Organization::Horde, CreatureRole::Harrier)).unwrap();
        roster.set_quantity(0, 5).unwrap();
        roster.add(creature("dragon", 3, Organization::Solo, CreatureRole::Solo)).unwrap();

        let report = CompositionAnalyzer::default().analyze(&party, &roster);

        let hordes = &report.organizations[0];
        assert_eq!(hordes.organization, Organization::Horde);
        assert_eq!(hordes.organization_count, 3);
        assert_eq!(hordes.verdict, BalanceVerdict::TooFew);

        let solos = &report.organizations[1];
        assert_eq!(solos.organizations_per_hero, 0.125);
        assert_eq!(solos.verdict, BalanceVerdict::TooFew);

        assert_eq!(report.total_creatures, 6);
        assert_eq!(report.total_organizations, 4);
        assert_eq!(hordes.share, 75.0);
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_unrecognized_organizations_keep_their_names() {
        let party = PartyConfig::new(1, 3, 0);
        let mut roster = Roster::new();
        let swarm = Organization::from("swarm");
        let cabal = Organization::from("cabal");
        roster.add(creature("bees", 1, swarm.clone(), CreatureRole::Harrier)).unwrap();
        roster.set_quantity(0, 3).unwrap();
        roster.add(creature("cultist", 1, cabal.clone(), CreatureRole::Hexer)).unwrap();

        let report = CompositionAnalyzer::default().analyze(&party, &roster);

        assert_eq!(report.organizations.len(), 2);
        assert_eq!(report.organizations[0].organization, swarm);
        assert_eq!(report.organizations[0].organization_count, 3);
        assert_eq!(report.organizations[0].verdict, BalanceVerdict::TooMany);
        assert_eq!(report.organizations[1].organization, cabal);
        assert_eq!(report.organizations[1].verdict, BalanceVerdict::Balanced);
        assert_eq!(
            report.recommendations,
            vec!["swarm: too many - Varies by organization".to_string()]
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["organizations"][1]["organization"], "cabal");
    }

    #[test]
    fn test_role_distribution_sums_quantities() {
        let mut roster = Roster::new();
        roster.add(creature("a", 1, Organization::Platoon, CreatureRole::Brute)).unwrap();
        roster.add(creature("b", 1, Organization::Minion, CreatureRole::Artillery)).unwrap();
        roster.add(creature("c", 1, Organization::Elite, CreatureRole::Brute)).unwrap();
        roster.set_quantity(2, 2).unwrap();

        let report = CompositionAnalyzer::default().analyze(&PartyConfig::default(), &roster);

        assert_eq!(report.roles.len(), 2);
        assert_eq!(report.roles[0].role, CreatureRole::Brute);
        assert_eq!(report.roles[0].creature_count, 3);
        assert_eq!(report.roles[1].role, CreatureRole::Artillery);
        assert_eq!(report.roles[1].creature_count, 4);
        assert_eq!(report.total_creatures, 7);
    }

    #[test]
    fn test_high_level_warnings() {
        let party = PartyConfig::new(4, 3, 0);
        let mut roster = Roster::new();
        roster.add(creature("peer", 5, Organization::Elite, CreatureRole::Brute)).unwrap();
        roster.add(creature("lich", 6, Organization::Solo, CreatureRole::Solo)).unwrap();

        let report = CompositionAnalyzer::default().analyze(&party, &roster);

        assert_eq!(report.high_level_warnings.len(), 1);
        let warning = &report.high_level_warnings[0];
        assert_eq!(warning.creature_id.as_str(), "lich");
        assert_eq!(warning.level, 6);
        assert_eq!(warning.hero_level, 3);
        assert_eq!(warning.quantity, 1);
    }

    #[test]
    fn test_high_level_margin_is_configurable() {
        let party = PartyConfig::new(4, 3, 0);
        let mut roster = Roster::new();
        roster.add(creature("peer", 5, Organization::Elite, CreatureRole::Brute)).unwrap();

        let strict = CompositionAnalyzer::new(AnalysisSettings { high_level_margin: 1 });
        assert_eq!(strict.analyze(&party, &roster).high_level_warnings.len(), 1);
    }

    #[test]
    fn test_analysis_does_not_mutate_roster() {
        let mut roster = Roster::new();
        roster.add(creature("rat", 1, Organization::Minion, CreatureRole::Harrier)).unwrap();
        let before = roster.clone();

        let _ = CompositionAnalyzer::default().analyze(&PartyConfig::default(), &roster);
        assert_eq!(roster, before);
    }
}
