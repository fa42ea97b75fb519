use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Stored in place of a missing suggested answer.
pub const PLACEHOLDER_ANSWER: &str = "No suggested answer provided";

#[derive(Debug, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Behavioral,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Behavioral => "behavioral",
            Category::General => "general",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "technical" => Ok(Category::Technical),
            "behavioral" => Ok(Category::Behavioral),
            "general" => Ok(Category::General),
            other => Err(UnknownVariant {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Maps model output onto a difficulty, falling back to the default
    /// for anything unrecognised.
    pub fn from_model_output(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("beginner") => Difficulty::Beginner,
            Some("advanced") => Difficulty::Advanced,
            _ => Difficulty::Intermediate,
        }
    }
}

/// A question ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub text: String,
    pub category: Category,
    pub job_role: String,
    pub suggested_answer: String,
    pub difficulty: Difficulty,
    pub created_by: Uuid,
    pub is_ai_generated: bool,
}

/// A question as stored. Never mutated by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuestion {
    pub id: Uuid,
    pub text: String,
    pub category: Category,
    pub job_role: String,
    pub suggested_answer: String,
    pub difficulty: Difficulty,
    pub created_by: Uuid,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl PersistedQuestion {
    pub fn from_new(id: Uuid, question: NewQuestion, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: question.text,
            category: question.category,
            job_role: question.job_role,
            suggested_answer: question.suggested_answer,
            difficulty: question.difficulty,
            created_by: question.created_by,
            is_ai_generated: question.is_ai_generated,
            created_at,
        }
    }
}
