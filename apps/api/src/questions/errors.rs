use std::time::Duration;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Every way a generation request can fail as a whole.
///
/// Per-record save failures are not represented here: they are absorbed by
/// the persistence loop and only escalate as `PersistenceTotalFailure`.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("generation service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("generation service returned no content")]
    UpstreamEmptyResponse,

    #[error("generation timed out after {}s", .0.as_secs())]
    GenerationTimedOut(Duration),

    #[error("failed to parse JSON from generation output: {reason}")]
    MalformedGenerationOutput { reason: String, raw: String },

    #[error("generation output has unexpected shape: {0}")]
    UnexpectedResponseShape(String),

    #[error("generation produced no usable questions")]
    NoQuestionsGenerated,

    #[error("failed to save any of {generated} generated questions")]
    PersistenceTotalFailure { generated: usize },
}

impl GenerationError {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::InvalidRequest(_) => "INVALID_REQUEST",
            GenerationError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            GenerationError::UpstreamEmptyResponse => "UPSTREAM_EMPTY_RESPONSE",
            GenerationError::GenerationTimedOut(_) => "GENERATION_TIMED_OUT",
            GenerationError::MalformedGenerationOutput { .. } => "MALFORMED_GENERATION_OUTPUT",
            GenerationError::UnexpectedResponseShape(_) => "UNEXPECTED_RESPONSE_SHAPE",
            GenerationError::NoQuestionsGenerated => "NO_QUESTIONS_GENERATED",
            GenerationError::PersistenceTotalFailure { .. } => "PERSISTENCE_TOTAL_FAILURE",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, GenerationError::InvalidRequest(_))
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyPrompt => GenerationError::InvalidRequest(err.to_string()),
            LlmError::EmptyContent => GenerationError::UpstreamEmptyResponse,
            other => GenerationError::UpstreamUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_errors_map_onto_taxonomy() {
        assert!(matches!(
            GenerationError::from(LlmError::EmptyContent),
            GenerationError::UpstreamEmptyResponse
        ));
        assert!(matches!(
            GenerationError::from(LlmError::Api {
                status: 503,
                message: "overloaded".to_string()
            }),
            GenerationError::UpstreamUnavailable(msg) if msg.contains("503")
        ));
        assert!(GenerationError::from(LlmError::EmptyPrompt).is_client_error());
    }

    #[test]
    fn test_timeout_message_names_budget() {
        let err = GenerationError::GenerationTimedOut(Duration::from_secs(40));
        assert_eq!(err.to_string(), "generation timed out after 40s");
        assert_eq!(err.code(), "GENERATION_TIMED_OUT");
    }
}
