use async_trait::async_trait;
use model_stop_core::error::BoxError;
use model_stop_core::status::ModelDescription;

/// The two remote operations the handler needs from the model-management
/// service. Implementations are constructed once per process and shared
/// read-only across invocations.
#[async_trait]
pub trait ModelLifecycleService: Send + Sync {
    async fn describe_model_versions(
        &self,
        project_arn: &str,
    ) -> Result<Vec<ModelDescription>, BoxError>;

    /// Requests the stop and returns once the service has accepted it; does
    /// not wait for the version to reach `STOPPED`.
    async fn stop_model_version(&self, model_arn: &str) -> Result<(), BoxError>;
}
