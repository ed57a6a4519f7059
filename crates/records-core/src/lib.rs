//! Academic Records Core Library
//!
//! Client-side mirror of the academic records workflow status taxonomy:
//! raw status normalization, labels and colours, stage folding and
//! progress, plus the status views used by list and detail pages.

pub mod catalog;
pub mod config;
pub mod normalizer;
pub mod stage;
pub mod view;

pub use catalog::StatusCatalog;
pub use config::CatalogConfig;
pub use normalizer::{canonical_statuses, normalize_status, status_color, status_label};
pub use stage::{fold_stage, progress_percent, stage_from_status, stage_sequence, step_index};
pub use view::{parse_records, RecordId, ResourceRecord, StatusCount, StatusSummary, StatusView};

pub use records_types::{ColorToken, ProcessStage, RecordsError, ResourceType, Result, WorkflowStatus};
