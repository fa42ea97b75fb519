//! Test doubles for the generation pipeline.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::question::{NewQuestion, PersistedQuestion};
use crate::questions::persistence::{check_required_fields, QuestionStore, StoreError};

/// What the scripted generator does when called.
pub enum Script {
    Reply(String),
    ReplyAfter(Duration, String),
    Empty,
    Unavailable,
}

pub struct ScriptedGenerator {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Script::Reply(text.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::ReplyAfter(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            Script::Empty => Err(LlmError::EmptyContent),
            Script::Unavailable => Err(LlmError::Api {
                status: 503,
                message: "service overloaded".to_string(),
            }),
        }
    }
}

/// Question store kept in memory. Rejects any record whose text is listed.
#[derive(Default)]
pub struct InMemoryQuestionStore {
    rejected_texts: HashSet<String>,
    records: Mutex<Vec<PersistedQuestion>>,
    attempts: AtomicUsize,
}

impl InMemoryQuestionStore {
    pub fn rejecting<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            rejected_texts: texts.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn records(&self) -> Vec<PersistedQuestion> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn create(&self, question: NewQuestion) -> Result<PersistedQuestion, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        check_required_fields(&question)?;
        if self.rejected_texts.contains(&question.text) {
            return Err(StoreError::Validation(format!(
                "store rejected '{}'",
                question.text
            )));
        }

        let persisted = PersistedQuestion::from_new(Uuid::new_v4(), question, Utc::now());
        self.records.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }
}
