use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::questions::persistence::QuestionStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data: concurrent generation requests share nothing
/// but the store.
#[derive(Clone)]
pub struct AppState {
    /// Generative-text backend. Default: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Question record store. Default: `PgQuestionStore`.
    pub store: Arc<dyn QuestionStore>,
    pub config: Config,
}
