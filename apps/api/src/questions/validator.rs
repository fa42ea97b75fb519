//! Batch Validator — turns the extracted candidate string into normalized
//! `CandidateQuestion`s, or rejects the whole batch.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::question::{Difficulty, PLACEHOLDER_ANSWER};
use crate::questions::GenerationError;

/// A question recovered from model output, normalized but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuestion {
    pub text: String,
    pub suggested_answer: String,
    pub difficulty: Difficulty,
}

/// Result of validating one batch. `questions` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBatch {
    pub questions: Vec<CandidateQuestion>,
    /// Elements discarded for lacking usable question text.
    pub dropped: usize,
}

pub fn validate_batch(candidate: &str) -> Result<ValidatedBatch, GenerationError> {
    let document: Value = serde_json::from_str(candidate).map_err(|e| {
        GenerationError::MalformedGenerationOutput {
            reason: e.to_string(),
            raw: candidate.to_string(),
        }
    })?;

    let elements = match document {
        Value::Array(items) => items,
        Value::Object(fields) => unwrap_single_array(fields)?,
        other => {
            return Err(GenerationError::UnexpectedResponseShape(format!(
                "expected a JSON array of questions, got {}",
                json_kind(&other)
            )))
        }
    };

    if elements.is_empty() {
        return Err(GenerationError::NoQuestionsGenerated);
    }

    let total = elements.len();
    let questions: Vec<CandidateQuestion> = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| normalize_element(index, element))
        .collect();

    if questions.is_empty() {
        return Err(GenerationError::NoQuestionsGenerated);
    }

    Ok(ValidatedBatch {
        dropped: total - questions.len(),
        questions,
    })
}

/// Accepts `{"<anything>": [...]}`: exactly one array-valued field.
fn unwrap_single_array(fields: Map<String, Value>) -> Result<Vec<Value>, GenerationError> {
    let mut arrays = fields.into_iter().filter_map(|(key, value)| match value {
        Value::Array(items) => Some((key, items)),
        _ => None,
    });

    match (arrays.next(), arrays.next()) {
        (Some((_, items)), None) => Ok(items),
        (None, _) => Err(GenerationError::UnexpectedResponseShape(
            "object does not contain an array of questions".to_string(),
        )),
        (Some((first, _)), Some((second, _))) => Err(GenerationError::UnexpectedResponseShape(
            format!("object contains more than one array field ('{first}', '{second}')"),
        )),
    }
}

fn normalize_element(index: usize, element: &Value) -> Option<CandidateQuestion> {
    let Some(fields) = element.as_object() else {
        warn!("Dropping generated item {index}: expected an object, got {}", json_kind(element));
        return None;
    };

    let text = match non_blank_str(fields.get("text")) {
        Some(text) => text,
        None => {
            warn!("Dropping generated item {index}: missing question text");
            return None;
        }
    };

    let suggested_answer = non_blank_str(
        fields
            .get("suggestedAnswer")
            .or_else(|| fields.get("suggested_answer")),
    )
    .unwrap_or(PLACEHOLDER_ANSWER);

    let difficulty = Difficulty::from_model_output(fields.get("difficulty").and_then(Value::as_str));

    Some(CandidateQuestion {
        text: text.to_string(),
        suggested_answer: suggested_answer.to_string(),
        difficulty,
    })
}

fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
