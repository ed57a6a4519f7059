//! Status catalogue: built-in tables plus configured aliases

use crate::config::{CatalogConfig, ResolvedAliases};
use crate::normalizer::{fallback_mapping, normalize_key, resource_mapping, DEFAULT_STATUS};
use crate::stage::{fold_stage, progress_percent, stage_index, stage_sequence};
use crate::view::{ResourceRecord, StatusCount, StatusSummary, StatusView};
use records_types::{ProcessStage, ResourceType, Result, WorkflowStatus};
use std::path::Path;

/// Normalizer with deployment-specific aliases layered over the built-in tables.
///
/// Lookup order: resource alias, resource table, global alias, fallback table,
/// then `DRAFT`.
#[derive(Debug, Clone, Default)]
pub struct StatusCatalog {
    aliases: ResolvedAliases,
}

impl StatusCatalog {
    /// Catalogue without aliases, identical to the free functions
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let aliases = config.resolve()?;
        log::info!(
            "Status catalogue: {} global aliases, {} resource alias tables",
            aliases.global.len(),
            aliases.per_resource.len()
        );
        Ok(Self { aliases })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&CatalogConfig::from_file(path)?)
    }

    /// Map a raw status onto the canonical set. Never fails.
    pub fn normalize(&self, resource_type: ResourceType, raw: Option<&str>) -> WorkflowStatus {
        let Some(key) = normalize_key(raw) else {
            return DEFAULT_STATUS;
        };

        self.aliases
            .per_resource
            .get(&resource_type)
            .and_then(|table| table.get(&key).copied())
            .or_else(|| resource_mapping(resource_type, &key))
            .or_else(|| self.aliases.global.get(&key).copied())
            .or_else(|| fallback_mapping(&key))
            .unwrap_or_else(|| {
                log::debug!("Unrecognized {} status '{}', defaulting to {}", resource_type, key, DEFAULT_STATUS);
                DEFAULT_STATUS
            })
    }

    pub fn stage_from_status(&self, resource_type: ResourceType, raw: Option<&str>) -> ProcessStage {
        fold_stage(resource_type, self.normalize(resource_type, raw))
    }

    pub fn step_index(&self, resource_type: ResourceType, raw: Option<&str>) -> usize {
        stage_index(resource_type, self.stage_from_status(resource_type, raw))
    }

    /// Build the chip and progress information for one raw status
    pub fn describe(&self, resource_type: ResourceType, raw: Option<&str>) -> StatusView {
        let status = self.normalize(resource_type, raw);
        let stage = fold_stage(resource_type, status);
        let step_index = stage_index(resource_type, stage);
        let stage_count = stage_sequence(resource_type).len();

        StatusView {
            resource_type,
            raw_status: raw.map(str::to_string),
            status,
            label: status.label(),
            color: status.color(),
            stage,
            stage_label: stage.label_for(resource_type),
            step_index,
            progress_percent: progress_percent(step_index, stage_count),
        }
    }

    /// Count records per canonical status for the stat cards of a list page
    pub fn summarize(&self, resource_type: ResourceType, records: &[ResourceRecord]) -> StatusSummary {
        let mut counts: Vec<StatusCount> = WorkflowStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                label: status.label(),
                count: 0,
            })
            .collect();

        for record in records {
            let status = self.normalize(resource_type, record.status.as_deref());
            if let Some(entry) = counts.iter_mut().find(|c| c.status == status) {
                entry.count += 1;
            }
        }

        StatusSummary {
            resource_type,
            total: records.len(),
            counts,
            latest_update: records.iter().filter_map(|r| r.updated_at).max(),
        }
    }

    /// Records whose normalized status equals `status`
    pub fn filter_by_status<'a>(
        &self,
        resource_type: ResourceType,
        records: &'a [ResourceRecord],
        status: WorkflowStatus,
    ) -> Vec<&'a ResourceRecord> {
        records
            .iter()
            .filter(|r| self.normalize(resource_type, r.status.as_deref()) == status)
            .collect()
    }
}
