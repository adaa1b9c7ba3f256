use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Root failure type for a pipeline run.
///
/// Every stage raises one of these variants; nothing else crosses the stage
/// boundary. The caller matches on the variant (or uses [`kind`]) to classify
/// the failure in its report.
///
/// [`kind`]: PipelineError::kind
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed or out-of-range input fields.
    #[error("validation error: {0}")]
    Validation(String),

    /// User absent from the directory, or inactive.
    #[error("auth error: {0}")]
    Auth(String),

    /// Unsupported currency, or a stage invoked out of required order.
    #[error("transform error: {0}")]
    Transform(String),

    /// Incomplete record or underlying write error; the message carries the
    /// underlying cause.
    #[error("storage error: {0}")]
    Storage(String),
}

impl PipelineError {
    /// Stable lowercase tag for the failure kind, used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::Auth(_) => "auth",
            PipelineError::Transform(_) => "transform",
            PipelineError::Storage(_) => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(PipelineError::Validation("x".into()).kind(), "validation");
        assert_eq!(PipelineError::Auth("x".into()).kind(), "auth");
        assert_eq!(PipelineError::Transform("x".into()).kind(), "transform");
        assert_eq!(PipelineError::Storage("x".into()).kind(), "storage");
    }

    #[test]
    fn test_message_includes_cause() {
        let err = PipelineError::Storage("write failed: disk full".into());
        assert_eq!(err.to_string(), "storage error: write failed: disk full");
    }
}
