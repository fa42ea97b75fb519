// Cross-cutting prompt fragments shared by every LLM call.
// Feature-specific prompts live next to the feature (see questions::prompts).

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON document. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
