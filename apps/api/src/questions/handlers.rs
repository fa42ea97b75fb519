//! Axum route handlers for the Question Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::models::question::PersistedQuestion;
use crate::questions::pipeline::generate_questions;
use crate::questions::report::{GenerationOutcome, OutcomeStatus};
use crate::questions::{GenerateQuestionsBody, GenerationError, GenerationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub message: String,
    pub status: OutcomeStatus,
    pub requested_count: u32,
    pub generated_count: usize,
    pub dropped_count: usize,
    pub saved_count: usize,
    pub questions: Vec<PersistedQuestion>,
}

impl From<GenerationOutcome> for GenerateQuestionsResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            message: outcome.message(),
            status: outcome.status,
            requested_count: outcome.requested_count,
            generated_count: outcome.generated_count,
            dropped_count: outcome.dropped_count,
            saved_count: outcome.saved_count(),
            questions: outcome.saved_records,
        }
    }
}

/// POST /api/v1/questions/generate
///
/// Generates questions for a role and category and saves them for the caller.
/// Full and partial success both return 201; `status` tells them apart.
/// An unreadable or mistyped body is an `InvalidRequest`, like a missing field.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<GenerateQuestionsBody>, JsonRejection>,
) -> Result<(StatusCode, Json<GenerateQuestionsResponse>), AppError> {
    let Json(body) =
        payload.map_err(|rejection| GenerationError::InvalidRequest(rejection.body_text()))?;
    let request = GenerationRequest::try_from(body)?;

    let outcome = generate_questions(
        state.generator.as_ref(),
        state.store.as_ref(),
        state.config.generation_timeout,
        user.id,
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(outcome.into())))
}
