use async_trait::async_trait;
use aws_sdk_rekognition::types::ProjectVersionDescription;
use model_stop_core::error::BoxError;
use model_stop_core::status::{ModelDescription, ModelStatus};

use crate::adapters::model_service::ModelLifecycleService;

#[derive(Debug, Clone)]
pub struct RekognitionModelService {
    client: aws_sdk_rekognition::Client,
}

impl RekognitionModelService {
    pub fn new(client: aws_sdk_rekognition::Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_rekognition::config::Builder::from(sdk_config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }
        Self::new(aws_sdk_rekognition::Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ModelLifecycleService for RekognitionModelService {
    async fn describe_model_versions(
        &self,
        project_arn: &str,
    ) -> Result<Vec<ModelDescription>, BoxError> {
        let output = self
            .client
            .describe_project_versions()
            .project_arn(project_arn)
            .send()
            .await
            .map_err(aws_sdk_rekognition::Error::from)?;

        Ok(output
            .project_version_descriptions()
            .iter()
            .map(model_description_from_sdk)
            .collect())
    }

    async fn stop_model_version(&self, model_arn: &str) -> Result<(), BoxError> {
        self.client
            .stop_project_version()
            .project_version_arn(model_arn)
            .send()
            .await
            .map(|_| ())
            .map_err(|error| BoxError::from(aws_sdk_rekognition::Error::from(error)))
    }
}

pub fn model_description_from_sdk(description: &ProjectVersionDescription) -> ModelDescription {
    let label = description
        .status()
        .map(|status| status.as_str())
        .unwrap_or_default();

    ModelDescription {
        status: ModelStatus::from_label(label),
        status_message: description.status_message().map(str::to_string),
        project_version_arn: description.project_version_arn().map(str::to_string),
    }
}
