use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle labels reported by the model-management service for a project
/// version. Parsing is exact and case-sensitive; anything outside the known
/// vocabulary is kept verbatim in [`ModelStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelStatus {
    TrainingInProgress,
    TrainingCompleted,
    TrainingFailed,
    Starting,
    Running,
    Failed,
    Stopping,
    Stopped,
    Deleting,
    CopyingInProgress,
    CopyingCompleted,
    CopyingFailed,
    Deprecated,
    Expired,
    Other(String),
}

pub const RUNNING_LABEL: &str = "RUNNING";

impl ModelStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "TRAINING_IN_PROGRESS" => Self::TrainingInProgress,
            "TRAINING_COMPLETED" => Self::TrainingCompleted,
            "TRAINING_FAILED" => Self::TrainingFailed,
            "STARTING" => Self::Starting,
            RUNNING_LABEL => Self::Running,
            "FAILED" => Self::Failed,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            "DELETING" => Self::Deleting,
            "COPYING_IN_PROGRESS" => Self::CopyingInProgress,
            "COPYING_COMPLETED" => Self::CopyingCompleted,
            "COPYING_FAILED" => Self::CopyingFailed,
            "DEPRECATED" => Self::Deprecated,
            "EXPIRED" => Self::Expired,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            Self::TrainingInProgress => "TRAINING_IN_PROGRESS",
            Self::TrainingCompleted => "TRAINING_COMPLETED",
            Self::TrainingFailed => "TRAINING_FAILED",
            Self::Starting => "STARTING",
            Self::Running => RUNNING_LABEL,
            Self::Failed => "FAILED",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Deleting => "DELETING",
            Self::CopyingInProgress => "COPYING_IN_PROGRESS",
            Self::CopyingCompleted => "COPYING_COMPLETED",
            Self::CopyingFailed => "COPYING_FAILED",
            Self::Deprecated => "DEPRECATED",
            Self::Expired => "EXPIRED",
            Self::Other(label) => label,
        }
    }

    /// Only the canonical running label counts; every other state, known or
    /// not, is left alone.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ModelStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ModelStatus> for String {
    fn from(status: ModelStatus) -> Self {
        match status {
            ModelStatus::Other(label) => label,
            known => known.as_label().to_string(),
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One project version as returned by a status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescription {
    pub status: ModelStatus,
    pub status_message: Option<String>,
    pub project_version_arn: Option<String>,
}

impl ModelDescription {
    pub fn with_status(status: ModelStatus) -> Self {
        Self {
            status,
            status_message: None,
            project_version_arn: None,
        }
    }
}
