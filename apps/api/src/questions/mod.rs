// AI question generation.
// Flow: prompt → generate (under deadline) → extract → validate → persist → report.
// The upstream model is reached only through llm_client::TextGenerator.

pub mod deadline;
pub mod errors;
pub mod extractor;
pub mod handlers;
pub mod persistence;
pub mod pipeline;
pub mod prompts;
pub mod report;
#[cfg(test)]
pub mod testing;
pub mod validator;

use serde::Deserialize;

use crate::models::question::Category;

pub use errors::GenerationError;

/// Number of questions asked for when the caller does not say.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;
/// Largest count accepted from a caller.
pub const MAX_QUESTION_COUNT: u32 = 50;

/// Request body as received. Fields are optional here so that a missing
/// field is reported as `InvalidRequest` instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsBody {
    pub job_role: Option<String>,
    pub category: Option<String>,
    pub count: Option<i64>,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub job_role: String,
    pub category: Category,
    /// Advisory: the model may return more or fewer.
    pub count: u32,
}

impl TryFrom<GenerateQuestionsBody> for GenerationRequest {
    type Error = GenerationError;

    fn try_from(body: GenerateQuestionsBody) -> Result<Self, Self::Error> {
        let job_role = body
            .job_role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        let category = body
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let (Some(job_role), Some(category)) = (job_role, category) else {
            return Err(GenerationError::InvalidRequest(
                "Job role and category are required".to_string(),
            ));
        };

        let category = category
            .parse::<Category>()
            .map_err(|e| GenerationError::InvalidRequest(e.to_string()))?;

        let count = match body.count {
            None => DEFAULT_QUESTION_COUNT,
            Some(n) if (1..=i64::from(MAX_QUESTION_COUNT)).contains(&n) => n as u32,
            Some(n) => {
                return Err(GenerationError::InvalidRequest(format!(
                    "count must be between 1 and {MAX_QUESTION_COUNT}, got {n}"
                )))
            }
        };

        Ok(GenerationRequest {
            job_role,
            category,
            count,
        })
    }
}
