//! Persistence Coordinator — stores each candidate independently.
//!
//! There is no batch transaction: a rejected record is logged and skipped,
//! and its siblings are still written.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use crate::models::question::{NewQuestion, PersistedQuestion};
use crate::questions::validator::CandidateQuestion;
use crate::questions::GenerationRequest;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Record store for questions. Each `create` is atomic on its own.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn create(&self, question: NewQuestion) -> Result<PersistedQuestion, StoreError>;
}

/// PostgreSQL-backed question store.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn create(&self, question: NewQuestion) -> Result<PersistedQuestion, StoreError> {
        check_required_fields(&question)?;

        let id = Uuid::new_v4();
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO questions
                (id, text, category, difficulty, job_role, suggested_answer, created_by, is_ai_generated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING created_at
            "#,
        )
        .bind(id)
        .bind(&question.text)
        .bind(question.category.as_str())
        .bind(question.difficulty.as_str())
        .bind(&question.job_role)
        .bind(&question.suggested_answer)
        .bind(question.created_by)
        .bind(question.is_ai_generated)
        .fetch_one(&self.pool)
        .await?;

        Ok(PersistedQuestion::from_new(id, question, created_at))
    }
}

/// Store-level checks on a record, independent of any backend.
pub fn check_required_fields(question: &NewQuestion) -> Result<(), StoreError> {
    if question.text.trim().is_empty() {
        return Err(StoreError::Validation("question text is required".to_string()));
    }
    if question.job_role.trim().is_empty() {
        return Err(StoreError::Validation("job role is required".to_string()));
    }
    Ok(())
}

/// What the coordinator managed to store.
#[derive(Debug)]
pub struct PersistenceReport {
    /// Stored records, in candidate order.
    pub saved: Vec<PersistedQuestion>,
    pub failed: usize,
}

/// Creates one record per candidate, sequentially and in order. A failed
/// create is logged with the question text and excluded from the result.
pub async fn persist_candidates(
    store: &dyn QuestionStore,
    request: &GenerationRequest,
    created_by: Uuid,
    candidates: Vec<CandidateQuestion>,
) -> PersistenceReport {
    let mut saved = Vec::with_capacity(candidates.len());
    let mut failed = 0;

    for candidate in candidates {
        let question = NewQuestion {
            text: candidate.text,
            category: request.category,
            job_role: request.job_role.clone(),
            suggested_answer: candidate.suggested_answer,
            difficulty: candidate.difficulty,
            created_by,
            is_ai_generated: true,
        };
        let text = question.text.clone();

        match store.create(question).await {
            Ok(persisted) => {
                debug!("Saved generated question {}", persisted.id);
                saved.push(persisted);
            }
            Err(e) => {
                failed += 1;
                error!(question = %text, "Error saving generated question: {e}");
            }
        }
    }

    PersistenceReport { saved, failed }
}
