//! Prompt Builder for question generation.

use crate::questions::GenerationRequest;

/// Question generation prompt template.
/// Replace: {count}, {job_role}, {category}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate {count} interview questions for a {job_role} position.
The questions should be {category} questions.

For each question, provide:
1. The question text
2. A suggested answer
3. The difficulty level (beginner, intermediate, or advanced)

Format the response as a JSON array of objects with exactly this structure:
[
  {
    "text": "question text",
    "suggestedAnswer": "detailed answer",
    "difficulty": "beginner | intermediate | advanced"
  }
]

Return only the JSON array. Do NOT wrap it in code fences and do NOT add any other text."#;

/// Builds the instruction text for one generation request. Pure and deterministic.
pub fn build_question_prompt(request: &GenerationRequest) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{count}", &request.count.to_string())
        .replace("{job_role}", &request.job_role)
        .replace("{category}", request.category.as_str())
}
