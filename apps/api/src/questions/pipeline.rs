//! Question Generation — orchestrates one generation request end to end.
//!
//! Flow: build prompt → generate under deadline → extract JSON → validate
//!       batch → persist each record → report outcome.
//!
//! Generation and parsing failures are all-or-nothing for the request.
//! Persistence failures are per record.

use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::llm_client::TextGenerator;
use crate::questions::deadline::with_deadline;
use crate::questions::extractor::extract_json_candidate;
use crate::questions::persistence::{persist_candidates, QuestionStore};
use crate::questions::prompts::build_question_prompt;
use crate::questions::report::{build_outcome, GenerationOutcome};
use crate::questions::validator::validate_batch;
use crate::questions::{GenerationError, GenerationRequest};

/// Runs the generation pipeline for an authenticated principal.
///
/// No state is shared between invocations; the store is the only shared resource.
/// Calling twice with the same request produces two independent batches.
pub async fn generate_questions(
    generator: &dyn TextGenerator,
    store: &dyn QuestionStore,
    budget: Duration,
    created_by: Uuid,
    request: GenerationRequest,
) -> Result<GenerationOutcome, GenerationError> {
    info!(
        "Generating {} {} questions for {} role",
        request.count, request.category, request.job_role
    );

    // Step 1: Prompt
    let prompt = build_question_prompt(&request);

    // Step 2: Upstream call, bounded by the budget
    let raw = with_deadline(budget, async {
        generator
            .generate(&prompt)
            .await
            .map_err(GenerationError::from)
    })
    .await?;
    if raw.trim().is_empty() {
        return Err(GenerationError::UpstreamEmptyResponse);
    }
    debug!("Raw generation response: {raw}");

    // Step 3: Extract + validate
    let candidate = extract_json_candidate(&raw);
    let batch = validate_batch(&candidate).inspect_err(|e| {
        if let GenerationError::MalformedGenerationOutput { raw, .. } = e {
            warn!(raw = %raw, "Generation output is not valid JSON");
        }
    })?;
    let generated_count = batch.questions.len();
    info!(
        "Generated {} usable questions ({} dropped)",
        generated_count, batch.dropped
    );

    // Step 4: Persist individually
    let persistence = persist_candidates(store, &request, created_by, batch.questions).await;
    if persistence.failed > 0 {
        warn!(
            "{} of {} generated questions could not be saved",
            persistence.failed, generated_count
        );
    }

    // Step 5: Report
    let outcome = build_outcome(request.count, generated_count, batch.dropped, persistence)?;
    info!(
        "Saved {} of {} generated questions for user {}",
        outcome.saved_count(),
        outcome.generated_count,
        created_by
    );

    Ok(outcome)
}
