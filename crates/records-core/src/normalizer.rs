//! Raw backend status vocabulary to canonical workflow status
//!
//! Every resource type has its own status vocabulary on the backend. The
//! tables below collapse each of them onto [`WorkflowStatus`], with a small
//! cross-resource fallback table and a final default of `DRAFT`.

use records_types::{ColorToken, ResourceType, WorkflowStatus};
use std::borrow::Cow;

/// Status used when nothing else matches
pub const DEFAULT_STATUS: WorkflowStatus = WorkflowStatus::Draft;

/// Trim and uppercase a raw status. Surrounding whitespace never matters;
/// missing and blank values yield `None`.
pub(crate) fn normalize_key(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Look up an uppercase key in the resource's own table
pub fn resource_mapping(resource_type: ResourceType, key: &str) -> Option<WorkflowStatus> {
    use ResourceType::*;
    use WorkflowStatus::*;

    match (resource_type, key) {
        // Canonical names map onto themselves for every resource
        (_, "DRAFT") => Some(Draft),
        (_, "REVIEWING") => Some(Reviewing),
        (_, "APPROVED") => Some(Approved),
        (_, "REJECTED") => Some(Rejected),
        (_, "PUBLISHED") => Some(Published),
        (_, "ARCHIVED") => Some(Archived),

        (Program | Major | Course | OrgUnit, "SUBMITTED") => Some(Reviewing),
        (Program | Major, "UNDER_REVIEW") => Some(Reviewing),
        (_, "ACTIVE") => Some(Published),
        (Course | OrgUnit, "INACTIVE") => Some(Archived),
        (Program | Major | Cohort, "SUSPENDED") => Some(Archived),

        (Cohort, "PLANNING") => Some(Draft),
        (Cohort, "RECRUITING") => Some(Reviewing),
        (Cohort, "GRADUATED") => Some(Archived),

        _ => None,
    }
}

/// Cross-resource fallback for legacy values
pub fn fallback_mapping(key: &str) -> Option<WorkflowStatus> {
    match key {
        "PROPOSED" => Some(WorkflowStatus::Draft),
        "CLOSED" => Some(WorkflowStatus::Archived),
        _ => None,
    }
}

/// Raw statuses the backend uses for a resource type, canonical names excluded
pub fn raw_statuses(resource_type: ResourceType) -> &'static [&'static str] {
    match resource_type {
        ResourceType::Program => &["SUBMITTED", "UNDER_REVIEW", "ACTIVE", "SUSPENDED"],
        ResourceType::Major => &["SUBMITTED", "UNDER_REVIEW", "ACTIVE", "SUSPENDED"],
        ResourceType::Course => &["SUBMITTED", "ACTIVE", "INACTIVE"],
        ResourceType::Cohort => &["PLANNING", "RECRUITING", "ACTIVE", "GRADUATED", "SUSPENDED"],
        ResourceType::OrgUnit => &["SUBMITTED", "ACTIVE", "INACTIVE"],
    }
}

/// Map a raw status onto the canonical set. Never fails.
pub fn normalize_status(resource_type: ResourceType, raw: Option<&str>) -> WorkflowStatus {
    let Some(key) = normalize_key(raw) else {
        return DEFAULT_STATUS;
    };

    resource_mapping(resource_type, &key)
        .or_else(|| fallback_mapping(&key))
        .unwrap_or_else(|| {
            log::debug!("Unrecognized {} status '{}', defaulting to {}", resource_type, key, DEFAULT_STATUS);
            DEFAULT_STATUS
        })
}

/// Exact canonical name; no trimming or case folding
fn canonical_name(value: &str) -> Option<WorkflowStatus> {
    match value {
        "DRAFT" => Some(WorkflowStatus::Draft),
        "REVIEWING" => Some(WorkflowStatus::Reviewing),
        "APPROVED" => Some(WorkflowStatus::Approved),
        "REJECTED" => Some(WorkflowStatus::Rejected),
        "PUBLISHED" => Some(WorkflowStatus::Published),
        "ARCHIVED" => Some(WorkflowStatus::Archived),
        _ => None,
    }
}

/// Label for a canonical status name; anything else is returned unchanged
pub fn status_label(value: &str) -> Cow<'_, str> {
    match canonical_name(value) {
        Some(status) => Cow::Borrowed(status.label()),
        None => Cow::Borrowed(value),
    }
}

/// Colour for a canonical status name; anything else gets the default colour
pub fn status_color(value: &str) -> ColorToken {
    canonical_name(value)
        .map(|status| status.color())
        .unwrap_or_default()
}

/// Canonical statuses in display order
pub fn canonical_statuses() -> &'static [WorkflowStatus] {
    &WorkflowStatus::ALL
}
