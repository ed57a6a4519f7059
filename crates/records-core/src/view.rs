//! Backend record envelopes and the status views built from them

use chrono::{DateTime, Utc};
use records_types::{ColorToken, ProcessStage, ResourceType, Result, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier; the backend uses numeric ids for some resources and codes for others
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Any academic resource as returned by the REST backend.
/// Only the fields needed for status display are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: RecordId,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordListing {
    Bare(Vec<ResourceRecord>),
    Paged { data: Vec<ResourceRecord> },
}

/// Parse a list response: either a bare array or a `{ "data": [...] }` page
pub fn parse_records(json: &str) -> Result<Vec<ResourceRecord>> {
    let listing: RecordListing = serde_json::from_str(json)?;
    Ok(match listing {
        RecordListing::Bare(records) => records,
        RecordListing::Paged { data } => data,
    })
}

/// Everything a status chip and progress bar need for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub resource_type: ResourceType,
    pub raw_status: Option<String>,
    pub status: WorkflowStatus,
    pub label: &'static str,
    pub color: ColorToken,
    pub stage: ProcessStage,
    pub stage_label: &'static str,
    pub step_index: usize,
    pub progress_percent: f64,
}

/// One stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: WorkflowStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Stat-card counts for a list page, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub resource_type: ResourceType,
    pub total: usize,
    pub counts: Vec<StatusCount>,
    pub latest_update: Option<DateTime<Utc>>,
}

impl StatusSummary {
    pub fn count_of(&self, status: WorkflowStatus) -> usize {
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
