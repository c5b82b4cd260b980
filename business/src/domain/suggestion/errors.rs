use crate::domain::errors::RepositoryError;

/// Caller-facing errors of the suggestion engine. AI unavailability is never
/// one of them; only invalid input or a failed backing store surface here.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.invalid_max_results")]
    InvalidMaxResults,
    #[error("suggestion.invalid_time_bound")]
    InvalidTimeBound,
    #[error("suggestion.repository")]
    Repository(#[from] RepositoryError),
}

/// Failures of the AI synthesis path. The orchestrator converts every variant
/// except `Repository` into a heuristic fallback.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis.no_ingredients")]
    NoIngredients,
    /// The completion adapter failed; the cause is kept for logging.
    #[error("synthesis.completion_failed: {0}")]
    CompletionFailed(String),
    /// Candidate failed structural validation.
    #[error("synthesis.invalid_candidate")]
    InvalidCandidate,
    /// Candidate uses none of the requested ingredients.
    #[error("synthesis.unrelated_recipe")]
    UnrelatedRecipe,
    #[error("synthesis.repository")]
    Repository(#[from] RepositoryError),
}
