//! Shared types for the academic records workflow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical workflow status shared by every resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    Draft,
    Reviewing,
    Approved,
    Rejected,
    Published,
    Archived,
}

impl WorkflowStatus {
    /// Display order used by filter selects and stat cards
    pub const ALL: [WorkflowStatus; 6] = [
        WorkflowStatus::Draft,
        WorkflowStatus::Reviewing,
        WorkflowStatus::Approved,
        WorkflowStatus::Rejected,
        WorkflowStatus::Published,
        WorkflowStatus::Archived,
    ];

    /// Backend name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Reviewing => "REVIEWING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Human-readable (Vietnamese) label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Bản nháp",
            Self::Reviewing => "Đang xem xét",
            Self::Approved => "Đã phê duyệt",
            Self::Rejected => "Từ chối",
            Self::Published => "Đã xuất bản",
            Self::Archived => "Lưu trữ",
        }
    }

    /// Chip colour token
    pub fn color(&self) -> ColorToken {
        match self {
            Self::Draft => ColorToken::Default,
            Self::Reviewing => ColorToken::Warning,
            Self::Approved => ColorToken::Info,
            Self::Rejected => ColorToken::Error,
            Self::Published => ColorToken::Success,
            Self::Archived => ColorToken::Default,
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse of a canonical name. Raw backend vocabulary goes through the
/// normalizer instead.
impl FromStr for WorkflowStatus {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        WorkflowStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == upper)
            .ok_or_else(|| RecordsError::UnknownStatus(s.to_string()))
    }
}

/// Academic resource whose status vocabulary is in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Program,
    Major,
    Course,
    Cohort,
    OrgUnit,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Program,
        ResourceType::Major,
        ResourceType::Course,
        ResourceType::Cohort,
        ResourceType::OrgUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Major => "major",
            Self::Course => "course",
            Self::Cohort => "cohort",
            Self::OrgUnit => "org_unit",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase().replace('-', "_");
        ResourceType::ALL
            .iter()
            .copied()
            .find(|resource| resource.as_str() == tag)
            .ok_or_else(|| RecordsError::UnknownResourceType(s.to_string()))
    }
}

/// UI severity colour for a status chip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    #[default]
    Default,
    Info,
    Warning,
    Success,
    Error,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Linear approval stage shown on progress bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStage {
    Draft,
    Reviewing,
    Approved,
    Published,
}

impl ProcessStage {
    pub const ALL: [ProcessStage; 4] = [
        ProcessStage::Draft,
        ProcessStage::Reviewing,
        ProcessStage::Approved,
        ProcessStage::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Reviewing => "REVIEWING",
            Self::Approved => "APPROVED",
            Self::Published => "PUBLISHED",
        }
    }

    /// Stage label worded for the given resource
    pub fn label_for(&self, resource_type: ResourceType) -> &'static str {
        use ProcessStage::*;
        use ResourceType::*;

        match (resource_type, self) {
            (Program, Draft) => "Soạn thảo",
            (Program, Reviewing) => "Đang thẩm định",
            (Program, Published) => "Ban hành",

            (Major, Draft) => "Khởi tạo",
            (Major, Reviewing) => "Khoa xem xét",
            (Major, Published) => "Công bố",

            (Course, Draft) => "Soạn đề cương",
            (Course, Reviewing) => "Bộ môn xem xét",
            (Course, Published) => "Đưa vào giảng dạy",

            (Cohort, Draft) => "Lập kế hoạch",
            (Cohort, Reviewing) => "Tuyển sinh",
            (Cohort, Published) => "Đang đào tạo",

            (OrgUnit, Draft) => "Đề xuất",
            (OrgUnit, Reviewing) => "Đang xem xét",
            (OrgUnit, Published) => "Hoạt động",

            (_, Approved) => "Đã phê duyệt",
        }
    }
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for the fallible edges of the records library
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("Unknown workflow status: {0}")]
    UnknownStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordsError>;
