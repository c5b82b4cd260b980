use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{SuggestionRequest, SuggestionResult};

pub struct GetSuggestionsParams {
    pub request: SuggestionRequest,
    /// When true, the AI synthesizer is attempted on a cache miss; its
    /// failures degrade to heuristic-only results, never to an error.
    pub prefer_ai: bool,
}

#[async_trait]
pub trait GetSuggestionsUseCase: Send + Sync {
    async fn execute(&self, params: GetSuggestionsParams)
    -> Result<SuggestionResult, SuggestionError>;
}
