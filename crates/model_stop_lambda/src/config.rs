pub const REKOGNITION_ENDPOINT_URL_VAR: &str = "REKOGNITION_ENDPOINT_URL";

/// Process-level settings read once at cold start. Region and credentials
/// are resolved by the AWS default provider chain, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaConfig {
    pub rekognition_endpoint_url: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            rekognition_endpoint_url: lookup(REKOGNITION_ENDPOINT_URL_VAR)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        }
    }
}
