use model_stop_core::contract::{
    decide_action, parse_trigger_event, validate_trigger, StopAction, StopOutcome, TriggerEvent,
};
use model_stop_core::error::StopHandlerError;
use serde_json::{json, Value};

use crate::adapters::model_service::ModelLifecycleService;
use crate::logging::{log_error, log_info};

/// Decodes a raw invocation payload and runs [`handle_stop_event`] on it.
pub async fn handle_trigger_payload(
    payload: Value,
    service: &dyn ModelLifecycleService,
) -> Result<StopOutcome, StopHandlerError> {
    let event = parse_trigger_event(payload).inspect_err(|error| {
        log_error("trigger_rejected", json!({"error": error.to_string()}));
    })?;
    handle_stop_event(&event, service).await
}

/// Samples the model status once and stops the model only when it is
/// `RUNNING`. Every other status is a successful no-op.
pub async fn handle_stop_event(
    event: &TriggerEvent,
    service: &dyn ModelLifecycleService,
) -> Result<StopOutcome, StopHandlerError> {
    if let Err(error) = validate_trigger(event) {
        log_error(
            "trigger_rejected",
            json!({
                "project_arn": event.project_arn.clone(),
                "error": error.to_string(),
            }),
        );
        return Err(error);
    }

    log_info(
        "trigger_received",
        json!({"project_arn": event.project_arn.clone()}),
    );

    let descriptions = match service.describe_model_versions(&event.project_arn).await {
        Ok(value) => value,
        Err(cause) => {
            let error = StopHandlerError::status_query_failed(&event.project_arn, cause);
            log_error(
                "status_query_failed",
                json!({
                    "project_arn": event.project_arn.clone(),
                    "error": error.report(),
                }),
            );
            return Err(error);
        }
    };

    let Some(description) = descriptions.into_iter().next() else {
        log_error(
            "model_not_found",
            json!({"project_arn": event.project_arn.clone()}),
        );
        return Err(StopHandlerError::resource_not_found(&event.project_arn));
    };

    log_info(
        "model_status_observed",
        json!({
            "project_arn": event.project_arn.clone(),
            "status": description.status.as_label(),
            "status_message": description.status_message.clone(),
            "project_version_arn": description.project_version_arn.clone(),
        }),
    );

    let status = description.status;
    if decide_action(&status) == StopAction::NoAction {
        log_info(
            "model_left_untouched",
            json!({
                "project_arn": event.project_arn.clone(),
                "status": status.as_label(),
                "recognized_status": status.is_recognized(),
            }),
        );
        return Ok(StopOutcome::no_action(event, status));
    }

    let model_arn = event.model_arn.as_str();
    if let Err(cause) = service.stop_model_version(model_arn).await {
        let error = StopHandlerError::stop_failed(model_arn, cause);
        log_error(
            "model_stop_failed",
            json!({
                "model_arn": model_arn,
                "error": error.report(),
            }),
        );
        return Err(error);
    }

    log_info("model_stop_requested", json!({"model_arn": model_arn}));
    Ok(StopOutcome::stop_requested(event, status))
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use model_stop_core::error::{BoxError, StopHandlerErrorKind};
    use model_stop_core::status::{ModelDescription, ModelStatus};

    use super::*;

    enum DescribeReply {
        Descriptions(Vec<ModelDescription>),
        Fails(&'static str),
    }

    struct ScriptedService {
        describe_reply: DescribeReply,
        stop_error: Option<&'static str>,
        describe_calls: Mutex<Vec<String>>,
        stop_calls: Mutex<Vec<String>>,
    }

    impl ScriptedService {
        fn reporting(label: &str) -> Self {
            Self::with_reply(DescribeReply::Descriptions(vec![
                ModelDescription::with_status(ModelStatus::from_label(label)),
            ]))
        }

        fn with_reply(describe_reply: DescribeReply) -> Self {
            Self {
                describe_reply,
                stop_error: None,
                describe_calls: Mutex::new(Vec::new()),
                stop_calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_stop(mut self, message: &'static str) -> Self {
            self.stop_error = Some(message);
            self
        }

        fn describe_calls(&self) -> Vec<String> {
            self.describe_calls.lock().expect("poisoned mutex").clone()
        }

        fn stop_calls(&self) -> Vec<String> {
            self.stop_calls.lock().expect("poisoned mutex").clone()
        }
    }

    #[async_trait]
    impl ModelLifecycleService for ScriptedService {
        async fn describe_model_versions(
            &self,
            project_arn: &str,
        ) -> Result<Vec<ModelDescription>, BoxError> {
            self.describe_calls
                .lock()
                .expect("poisoned mutex")
                .push(project_arn.to_string());
            match &self.describe_reply {
                DescribeReply::Descriptions(values) => Ok(values.clone()),
                DescribeReply::Fails(message) => Err((*message).into()),
            }
        }

        async fn stop_model_version(&self, model_arn: &str) -> Result<(), BoxError> {
            self.stop_calls
                .lock()
                .expect("poisoned mutex")
                .push(model_arn.to_string());
            match self.stop_error {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn running_model_is_stopped_once() {
        let service = ScriptedService::reporting("RUNNING");
        let outcome = handle_stop_event(&TriggerEvent::new("p1", "m1"), &service)
            .await
            .expect("stop should succeed");

        assert_eq!(outcome.action, StopAction::StopRequested);
        assert_eq!(outcome.model_arn.as_deref(), Some("m1"));
        assert_eq!(service.describe_calls(), vec!["p1".to_string()]);
        assert_eq!(service.stop_calls(), vec!["m1".to_string()]);
    }

    #[tokio::test]
    async fn non_running_statuses_are_left_alone() {
        for label in [
            "TRAINING",
            "TRAINING_IN_PROGRESS",
            "STOPPING",
            "FAILED",
            "running",
            "SOMETHING_NEW",
        ] {
            let service = ScriptedService::reporting(label);
            let outcome = handle_stop_event(&TriggerEvent::new("p1", "m1"), &service)
                .await
                .expect("no-op should succeed");

            assert_eq!(outcome.action, StopAction::NoAction, "{label}");
            assert_eq!(outcome.observed_status.as_label(), label);
            assert!(service.stop_calls().is_empty(), "{label} must not stop");
        }
    }

    #[tokio::test]
    async fn empty_project_arn_makes_no_remote_calls() {
        let service = ScriptedService::reporting("RUNNING");
        let error = handle_stop_event(&TriggerEvent::new("", "m1"), &service)
            .await
            .expect_err("empty project should fail");

        assert_eq!(error.kind(), StopHandlerErrorKind::InvalidInput);
        assert!(service.describe_calls().is_empty());
        assert!(service.stop_calls().is_empty());
    }

    #[tokio::test]
    async fn describe_failure_preserves_cause() {
        let service = ScriptedService::with_reply(DescribeReply::Fails("AccessDeniedException"));
        let error = handle_stop_event(&TriggerEvent::new("p1", "m1"), &service)
            .await
            .expect_err("describe failure should surface");

        assert_eq!(error.kind(), StopHandlerErrorKind::StatusQueryFailed);
        let cause = StdError::source(&error).expect("cause should be kept");
        assert_eq!(cause.to_string(), "AccessDeniedException");
        assert!(service.stop_calls().is_empty());
    }

    #[tokio::test]
    async fn empty_describe_result_is_not_found() {
        let service = ScriptedService::with_reply(DescribeReply::Descriptions(Vec::new()));
        let error = handle_stop_event(&TriggerEvent::new("p2", ""), &service)
            .await
            .expect_err("missing model should fail");

        assert_eq!(error.kind(), StopHandlerErrorKind::ResourceNotFound);
        assert!(service.stop_calls().is_empty());
    }

    #[tokio::test]
    async fn only_first_description_is_consulted() {
        let service = ScriptedService::with_reply(DescribeReply::Descriptions(vec![
            ModelDescription::with_status(ModelStatus::Stopped),
            ModelDescription::with_status(ModelStatus::Running),
        ]));
        let outcome = handle_stop_event(&TriggerEvent::new("p1", "m1"), &service)
            .await
            .expect("no-op should succeed");

        assert_eq!(outcome.action, StopAction::NoAction);
        assert_eq!(outcome.observed_status, ModelStatus::Stopped);
        assert!(service.stop_calls().is_empty());
    }

    #[tokio::test]
    async fn stop_failure_is_surfaced_not_retried() {
        let service = ScriptedService::reporting("RUNNING").failing_stop("ResourceInUseException");
        let error = handle_stop_event(&TriggerEvent::new("p1", "m1"), &service)
            .await
            .expect_err("stop failure should surface");

        assert_eq!(error.kind(), StopHandlerErrorKind::StopFailed);
        assert_eq!(
            error.report(),
            "stop_failed: failed to stop model m1: ResourceInUseException"
        );
        assert_eq!(service.stop_calls().len(), 1);
    }

    #[tokio::test]
    async fn running_without_model_arn_surfaces_the_stop_error() {
        let service = ScriptedService::reporting("RUNNING")
            .failing_stop("ValidationException: ProjectVersionArn is required");
        let error = handle_stop_event(&TriggerEvent::new("p1", ""), &service)
            .await
            .expect_err("empty stop target should fail at the service");

        assert_eq!(error.kind(), StopHandlerErrorKind::StopFailed);
        assert_eq!(service.describe_calls(), vec!["p1".to_string()]);
        assert_eq!(service.stop_calls(), vec![String::new()]);
    }

    #[tokio::test]
    async fn identifiers_reach_the_service_unchanged() {
        let service = ScriptedService::reporting("RUNNING");
        handle_stop_event(&TriggerEvent::new(" p1 ", " m1 "), &service)
            .await
            .expect("stop should succeed");

        assert_eq!(service.describe_calls(), vec![" p1 ".to_string()]);
        assert_eq!(service.stop_calls(), vec![" m1 ".to_string()]);
    }

    #[tokio::test]
    async fn malformed_payload_is_invalid_input() {
        let service = ScriptedService::reporting("RUNNING");
        let error = handle_trigger_payload(json!(["p1"]), &service)
            .await
            .expect_err("array payload should fail");

        assert_eq!(error.kind(), StopHandlerErrorKind::InvalidInput);
        assert!(service.describe_calls().is_empty());
    }
}
