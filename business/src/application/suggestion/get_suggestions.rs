use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::cache::SuggestionCache;
use crate::domain::suggestion::errors::{SuggestionError, SynthesisError};
use crate::domain::suggestion::model::{SuggestionResult, SuggestionSource};
use crate::domain::suggestion::use_cases::get_suggestions::{
    GetSuggestionsParams, GetSuggestionsUseCase,
};

use super::heuristic::HeuristicMatcher;
use super::synthesize::RecipeSynthesizer;

/// Public entry point of the suggestion engine. Coordinates cache lookup,
/// source selection, fallback on AI failure, and cache population. Guarantees
/// failure only on invalid input or store unavailability; AI unavailability is
/// never user-visible.
pub struct GetSuggestionsUseCaseImpl {
    pub matcher: HeuristicMatcher,
    pub synthesizer: RecipeSynthesizer,
    pub cache: Arc<SuggestionCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSuggestionsUseCase for GetSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetSuggestionsParams,
    ) -> Result<SuggestionResult, SuggestionError> {
        let request = params.request;
        let key = SuggestionCache::key(&request);

        if let Some((suggestions, source)) = self.cache.get(&key) {
            self.logger
                .debug(&format!("Suggestion cache hit for key {}", key));
            return Ok(SuggestionResult {
                suggestions,
                source,
                cache_hit: true,
            });
        }

        let mut suggestions = self.matcher.match_recipes(&request).await?;

        let source = if params.prefer_ai {
            match self.synthesizer.synthesize(&request).await {
                Ok(ai_suggestion) => {
                    suggestions.insert(0, ai_suggestion);
                    suggestions.truncate(request.max_results);
                    SuggestionSource::Ai
                }
                Err(SynthesisError::Repository(err)) => return Err(err.into()),
                Err(err) => {
                    self.logger.warn(&format!(
                        "AI synthesis failed, falling back to heuristic suggestions: {}",
                        err
                    ));
                    SuggestionSource::Heuristic
                }
            }
        } else {
            SuggestionSource::Heuristic
        };

        self.cache.put(&key, suggestions.clone(), source.clone());
        self.logger.info(&format!(
            "Computed {} suggestions (source: {})",
            suggestions.len(),
            source
        ));

        Ok(SuggestionResult {
            suggestions,
            source,
            cache_hit: false,
        })
    }
}
