use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StopHandlerError;
use crate::status::ModelStatus;

/// Scheduled trigger payload. Both identifiers default to empty so that a
/// missing field is reported as invalid input rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerEvent {
    #[serde(rename = "projectArn", default)]
    pub project_arn: String,
    #[serde(rename = "modelArn", default)]
    pub model_arn: String,
}

impl TriggerEvent {
    pub fn new(project_arn: impl Into<String>, model_arn: impl Into<String>) -> Self {
        Self {
            project_arn: project_arn.into(),
            model_arn: model_arn.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopAction {
    StopRequested,
    NoAction,
}

/// Success value of an invocation, echoed back to the runtime as the
/// response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopOutcome {
    pub action: StopAction,
    #[serde(rename = "projectArn")]
    pub project_arn: String,
    #[serde(rename = "modelArn", skip_serializing_if = "Option::is_none")]
    pub model_arn: Option<String>,
    #[serde(rename = "observedStatus")]
    pub observed_status: ModelStatus,
}

impl StopOutcome {
    pub fn stop_requested(event: &TriggerEvent, observed_status: ModelStatus) -> Self {
        Self {
            action: StopAction::StopRequested,
            project_arn: event.project_arn.clone(),
            model_arn: Some(event.model_arn.clone()),
            observed_status,
        }
    }

    pub fn no_action(event: &TriggerEvent, observed_status: ModelStatus) -> Self {
        Self {
            action: StopAction::NoAction,
            project_arn: event.project_arn.clone(),
            model_arn: None,
            observed_status,
        }
    }
}

pub fn decide_action(status: &ModelStatus) -> StopAction {
    if status.is_running() {
        StopAction::StopRequested
    } else {
        StopAction::NoAction
    }
}

/// Decodes a raw invocation payload. Fields are read from the top level
/// only; anything else in the object is ignored.
pub fn parse_trigger_event(payload: Value) -> Result<TriggerEvent, StopHandlerError> {
    if !payload.is_object() {
        return Err(StopHandlerError::invalid_input(
            "trigger payload must be a JSON object",
        ));
    }
    serde_json::from_value(payload)
        .map_err(|error| StopHandlerError::invalid_input(format!("malformed trigger payload: {error}")))
}

pub fn validate_trigger(event: &TriggerEvent) -> Result<(), StopHandlerError> {
    if event.project_arn.trim().is_empty() {
        return Err(StopHandlerError::invalid_input(
            "missing required parameters: projectArn is required",
        ));
    }
    Ok(())
}
