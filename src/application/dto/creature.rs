use serde::{Deserialize, Serialize};

use crate::application::services::{CatalogFacets, CreatureFilter};
use crate::domain::entities::CreatureDefinition;
use crate::domain::value_objects::{CreatureRole, Organization};

/// Query string for catalog searches; "all" or an empty value disables a filter
#[derive(Debug, Default, Deserialize)]
pub struct CreatureQueryDto {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub creature_type: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CreatureQueryDto {
    /// Convert to a catalog filter, rejecting unparsable levels and roles
    pub fn into_filter(self) -> Result<CreatureFilter, String> {
        Ok(CreatureFilter {
            search: self.search.filter(|s| !s.trim().is_empty()),
            creature_type: selected(self.creature_type),
            organization: selected(self.organization).map(Organization::from),
            level: selected(self.level)
                .map(|l| l.parse::<u32>().map_err(|_| format!("Invalid level: {}", l)))
                .transpose()?,
            role: selected(self.role)
                .map(|r| r.parse::<CreatureRole>())
                .transpose()?,
        })
    }
}

fn selected(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case("all"))
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatureResponseDto {
    pub id: String,
    pub name: String,
    pub types: Vec<String>,
    pub level: u32,
    pub encounter_value: u32,
    pub organization: Organization,
    pub role: CreatureRole,
    /// Quantity a single add puts into the roster
    pub add_amount: u32,
    pub add_label: String,
}

impl From<&CreatureDefinition> for CreatureResponseDto {
    fn from(c: &CreatureDefinition) -> Self {
        Self {
            id: c.id.as_str().to_string(),
            name: c.name.clone(),
            types: c.types.clone(),
            level: c.level,
            encounter_value: c.encounter_value,
            organization: c.organization.clone(),
            role: c.role,
            add_amount: c.organization.add_amount(),
            add_label: c.add_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatureFacetsResponseDto {
    pub types: Vec<String>,
    pub organizations: Vec<Organization>,
    pub levels: Vec<u32>,
    pub roles: Vec<CreatureRole>,
}

impl From<CatalogFacets> for CreatureFacetsResponseDto {
    fn from(f: CatalogFacets) -> Self {
        Self {
            types: f.types,
            organizations: f.organizations,
            levels: f.levels,
            roles: f.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_disables_filter() {
        let query = CreatureQueryDto {
            search: Some("  ".to_string()),
            organization: Some("all".to_string()),
            level: Some("3".to_string()),
            role: Some("Brute".to_string()),
            ..Default::default()
        };

        let filter = query.into_filter().unwrap();
        assert!(filter.search.is_none());
        assert!(filter.organization.is_none());
        assert_eq!(filter.level, Some(3));
        assert_eq!(filter.role, Some(CreatureRole::Brute));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let query = CreatureQueryDto {
            level: Some("high".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());

        let query = CreatureQueryDto {
            role: Some("jester".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_catalog_organization_keys_pass_through() {
        let query = CreatureQueryDto {
            organization: Some("Swarm".to_string()),
            ..Default::default()
        };

        let filter = query.into_filter().unwrap();
        assert_eq!(filter.organization, Some(Organization::from("Swarm")));
    }
}
