use lambda_runtime::{service_fn, Error, LambdaEvent};
use model_stop_core::contract::StopOutcome;
use model_stop_lambda::adapters::rekognition::RekognitionModelService;
use model_stop_lambda::config::LambdaConfig;
use model_stop_lambda::handlers::stop_model::handle_trigger_payload;
use model_stop_lambda::logging::log_info;
use serde_json::{json, Value};

async fn handle_request(
    service: &RekognitionModelService,
    event: LambdaEvent<Value>,
) -> Result<StopOutcome, Error> {
    log_info(
        "invocation_started",
        json!({
            "request_id": event.context.request_id.clone(),
            "deadline_ms": event.context.deadline,
        }),
    );

    handle_trigger_payload(event.payload, service)
        .await
        .map_err(|error| Error::from(error.report()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let service = RekognitionModelService::from_sdk_config(
        &aws_config,
        config.rekognition_endpoint_url.as_deref(),
    );

    let service = &service;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(service, event).await
    }))
    .await
}
