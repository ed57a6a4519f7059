//! Process stages and progress for workflow visualizations

use crate::normalizer::normalize_status;
use records_types::{ProcessStage, ResourceType, WorkflowStatus};

/// Fold a canonical status onto one of the four process stages.
///
/// Side statuses are folded per resource: a rejected major is still under
/// departmental review, while a rejected program goes back to drafting.
pub fn fold_stage(resource_type: ResourceType, status: WorkflowStatus) -> ProcessStage {
    use ResourceType::*;
    use WorkflowStatus::*;

    match (resource_type, status) {
        (_, Draft) => ProcessStage::Draft,
        (_, Reviewing) => ProcessStage::Reviewing,
        (_, Approved) => ProcessStage::Approved,
        (_, Published) => ProcessStage::Published,

        (Program, Rejected) => ProcessStage::Draft,
        (Major, Rejected) => ProcessStage::Reviewing,
        (Course, Rejected) => ProcessStage::Draft,
        (Cohort, Rejected) => ProcessStage::Reviewing,
        (OrgUnit, Rejected) => ProcessStage::Reviewing,

        (Program, Archived) => ProcessStage::Published,
        (Major, Archived) => ProcessStage::Draft,
        (Course, Archived) => ProcessStage::Draft,
        (Cohort, Archived) => ProcessStage::Published,
        (OrgUnit, Archived) => ProcessStage::Published,
    }
}

/// Stage for a raw or canonical status string
pub fn stage_from_status(resource_type: ResourceType, status: Option<&str>) -> ProcessStage {
    fold_stage(resource_type, normalize_status(resource_type, status))
}

/// Ordered stage sequence for a resource type
pub fn stage_sequence(_resource_type: ResourceType) -> &'static [ProcessStage] {
    // Every resource currently shares the same four slots; only the labels differ.
    &ProcessStage::ALL
}

/// Position of a stage within the resource's sequence
pub fn stage_index(resource_type: ResourceType, stage: ProcessStage) -> usize {
    stage_sequence(resource_type)
        .iter()
        .position(|s| *s == stage)
        .unwrap_or(0)
}

/// Zero-based step index of a status, always within the stage sequence
pub fn step_index(resource_type: ResourceType, status: Option<&str>) -> usize {
    stage_index(resource_type, stage_from_status(resource_type, status))
}

/// Progress bar fill: `index / (stage_count - 1) * 100`, clamped to `[0, 100]`
pub fn progress_percent(index: usize, stage_count: usize) -> f64 {
    if stage_count < 2 {
        return 0.0;
    }
    let percent = index as f64 / (stage_count - 1) as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}
