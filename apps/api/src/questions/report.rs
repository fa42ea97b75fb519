//! Result Reporter — turns persistence results into a definitive outcome.

use serde::Serialize;

use crate::models::question::PersistedQuestion;
use crate::questions::persistence::PersistenceReport;
use crate::questions::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Success,
    PartialSuccess,
}

/// The result of one pipeline invocation. Not stored anywhere.
///
/// `saved_count <= generated_count`; neither is bounded by `requested_count`.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub status: OutcomeStatus,
    pub requested_count: u32,
    pub generated_count: usize,
    pub dropped_count: usize,
    pub saved_records: Vec<PersistedQuestion>,
}

impl GenerationOutcome {
    pub fn saved_count(&self) -> usize {
        self.saved_records.len()
    }

    pub fn message(&self) -> String {
        match self.status {
            OutcomeStatus::Success => format!(
                "Successfully saved {} of {} questions",
                self.saved_count(),
                self.generated_count
            ),
            OutcomeStatus::PartialSuccess => format!(
                "Partially succeeded: saved {} of {} questions",
                self.saved_count(),
                self.generated_count
            ),
        }
    }
}

/// Classifies the result. Nothing saved is an error even though generation worked.
pub fn build_outcome(
    requested_count: u32,
    generated_count: usize,
    dropped_count: usize,
    persistence: PersistenceReport,
) -> Result<GenerationOutcome, GenerationError> {
    let saved_count = persistence.saved.len();

    if saved_count == 0 {
        return Err(GenerationError::PersistenceTotalFailure {
            generated: generated_count,
        });
    }

    let status = if saved_count < generated_count {
        OutcomeStatus::PartialSuccess
    } else {
        OutcomeStatus::Success
    };

    Ok(GenerationOutcome {
        status,
        requested_count,
        generated_count,
        dropped_count,
        saved_records: persistence.saved,
    })
}
