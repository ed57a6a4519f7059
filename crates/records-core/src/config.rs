//! Alias catalogue configuration

use records_types::{RecordsError, ResourceType, Result, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Extra raw-status aliases, as written in the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Aliases tried for every resource after its own table misses
    #[serde(default)]
    pub global_aliases: BTreeMap<String, String>,

    /// Aliases tried before the built-in table of one resource
    #[serde(default)]
    pub resource_aliases: BTreeMap<String, BTreeMap<String, String>>,
}

/// Validated aliases with uppercase keys and typed targets
#[derive(Debug, Clone, Default)]
pub struct ResolvedAliases {
    pub global: HashMap<String, WorkflowStatus>,
    pub per_resource: HashMap<ResourceType, HashMap<String, WorkflowStatus>>,
}

impl CatalogConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RecordsError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        let config = Self::from_json_str(&content)?;
        log::info!("Loaded status alias configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(json)
            .map_err(|e| RecordsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    /// Turn the string maps into typed alias tables.
    ///
    /// Keys that normalize to the same alias must agree on their target, and
    /// resource keys that parse to the same resource type are merged.
    pub fn resolve(&self) -> Result<ResolvedAliases> {
        let mut global = AliasTable::default();
        global.extend("global_aliases", &self.global_aliases)?;

        let mut tables: HashMap<ResourceType, AliasTable> = HashMap::new();
        for (resource, table) in &self.resource_aliases {
            let resource_type: ResourceType = resource
                .parse()
                .map_err(|_| RecordsError::Config(format!("Unknown resource type in resource_aliases: '{}'", resource)))?;
            let section = format!("resource_aliases.{}", resource);
            tables.entry(resource_type).or_default().extend(&section, table)?;
        }

        Ok(ResolvedAliases {
            global: global.into_statuses(),
            per_resource: tables
                .into_iter()
                .map(|(resource_type, table)| (resource_type, table.into_statuses()))
                .collect(),
        })
    }
}

/// Normalized alias -> (source section and key, target)
#[derive(Default)]
struct AliasTable {
    entries: HashMap<String, (String, WorkflowStatus)>,
}

impl AliasTable {
    fn extend(&mut self, section: &str, table: &BTreeMap<String, String>) -> Result<()> {
        for (alias, target) in table {
            let key = alias.trim().to_uppercase();
            if key.is_empty() {
                return Err(RecordsError::Config(format!("Empty alias in {}", section)));
            }

            let status: WorkflowStatus = target.parse().map_err(|_| {
                RecordsError::Config(format!(
                    "Alias '{}' in {} points to '{}', which is not a workflow status",
                    alias, section, target
                ))
            })?;

            let source = format!("{}.{}", section, alias);
            match self.entries.get(&key) {
                Some((first, existing)) if *existing != status => {
                    return Err(RecordsError::Config(format!(
                        "Conflicting aliases for {}: '{}' points to {} but '{}' points to {}",
                        key, first, existing, source, status
                    )));
                }
                Some(_) => {}
                None => {
                    self.entries.insert(key, (source, status));
                }
            }
        }

        Ok(())
    }

    fn into_statuses(self) -> HashMap<String, WorkflowStatus> {
        self.entries
            .into_iter()
            .map(|(key, (_, status))| (key, status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid() {
        let config = CatalogConfig::from_json_str("{}").unwrap();
        assert!(config.global_aliases.is_empty());
        assert!(config.resource_aliases.is_empty());
    }

    #[test]
    fn test_resolve_normalizes_keys() {
        let json = r#"{
            "global_aliases": { " pending ": "reviewing" },
            "resource_aliases": { "org-unit": { "Dissolved": "ARCHIVED" } }
        }"#;

        let resolved = CatalogConfig::from_json_str(json).unwrap().resolve().unwrap();
        assert_eq!(resolved.global.get("PENDING"), Some(&WorkflowStatus::Reviewing));
        assert_eq!(
            resolved.per_resource[&ResourceType::OrgUnit].get("DISSOLVED"),
            Some(&WorkflowStatus::Archived)
        );
    }

    #[test]
    fn test_rejects_unknown_target() {
        let json = r#"{ "global_aliases": { "PENDING": "WAITING" } }"#;
        let err = CatalogConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, RecordsError::Config(_)));
        assert!(err.to_string().contains("WAITING"));
    }

    #[test]
    fn test_rejects_empty_alias() {
        let json = r#"{ "global_aliases": { "  ": "DRAFT" } }"#;
        assert!(matches!(CatalogConfig::from_json_str(json), Err(RecordsError::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_resource() {
        let json = r#"{ "resource_aliases": { "faculty": { "OPEN": "PUBLISHED" } } }"#;
        let err = CatalogConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("faculty"));
    }

    #[test]
    fn test_same_alias_in_different_case_must_agree() {
        let json = r#"{ "global_aliases": { "pending": "DRAFT", "PENDING": "REVIEWING" } }"#;
        let err = CatalogConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, RecordsError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("global_aliases.pending"));
        assert!(message.contains("global_aliases.PENDING"));
    }

    #[test]
    fn test_same_alias_with_same_target_is_accepted() {
        let json = r#"{ "global_aliases": { "pending": "REVIEWING", " PENDING ": "reviewing" } }"#;
        let resolved = CatalogConfig::from_json_str(json).unwrap().resolve().unwrap();
        assert_eq!(resolved.global.len(), 1);
        assert_eq!(resolved.global.get("PENDING"), Some(&WorkflowStatus::Reviewing));
    }

    #[test]
    fn test_resource_spellings_are_merged() {
        let json = r#"{
            "resource_aliases": {
                "org_unit": { "MERGED": "ARCHIVED" },
                "org-unit": { "SPLIT": "DRAFT" }
            }
        }"#;

        for _ in 0..20 {
            let resolved = CatalogConfig::from_json_str(json).unwrap().resolve().unwrap();
            let table = &resolved.per_resource[&ResourceType::OrgUnit];
            assert_eq!(resolved.per_resource.len(), 1);
            assert_eq!(table.get("MERGED"), Some(&WorkflowStatus::Archived));
            assert_eq!(table.get("SPLIT"), Some(&WorkflowStatus::Draft));
        }
    }

    #[test]
    fn test_merged_resource_spellings_must_agree() {
        let json = r#"{
            "resource_aliases": {
                "org_unit": { "MERGED": "ARCHIVED" },
                "Org-Unit": { "merged": "DRAFT" }
            }
        }"#;

        let err = CatalogConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Conflicting aliases for MERGED"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(CatalogConfig::from_json_str("{ not json"), Err(RecordsError::Config(_))));
    }
}
