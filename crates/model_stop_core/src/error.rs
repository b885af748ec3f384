use std::error::Error as StdError;
use std::fmt;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopHandlerErrorKind {
    InvalidInput,
    StatusQueryFailed,
    ResourceNotFound,
    StopFailed,
}

impl StopHandlerErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::StatusQueryFailed => "status_query_failed",
            Self::ResourceNotFound => "resource_not_found",
            Self::StopFailed => "stop_failed",
        }
    }
}

impl fmt::Display for StopHandlerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single invocation. The kind is the branchable part; the
/// underlying service error, when there is one, is reachable through
/// [`std::error::Error::source`].
#[derive(Debug)]
pub struct StopHandlerError {
    kind: StopHandlerErrorKind,
    message: String,
    source: Option<BoxError>,
}

impl StopHandlerError {
    pub fn new(kind: StopHandlerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StopHandlerErrorKind::InvalidInput, message)
    }

    pub fn status_query_failed(project_arn: &str, source: BoxError) -> Self {
        Self::new(
            StopHandlerErrorKind::StatusQueryFailed,
            format!("failed to check model status for project {project_arn}"),
        )
        .with_source(source)
    }

    pub fn resource_not_found(project_arn: &str) -> Self {
        Self::new(
            StopHandlerErrorKind::ResourceNotFound,
            format!("no model versions found for project {project_arn}"),
        )
    }

    pub fn stop_failed(model_arn: &str, source: BoxError) -> Self {
        Self::new(
            StopHandlerErrorKind::StopFailed,
            format!("failed to stop model {model_arn}"),
        )
        .with_source(source)
    }

    pub fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn kind(&self) -> StopHandlerErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Display text followed by every cause in the chain, for sinks that only
    /// keep a single string.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut cause = StdError::source(self);
        while let Some(error) = cause {
            report.push_str(": ");
            report.push_str(&error.to_string());
            cause = error.source();
        }
        report
    }
}

impl fmt::Display for StopHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for StopHandlerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|error| error as &(dyn StdError + 'static))
    }
}
