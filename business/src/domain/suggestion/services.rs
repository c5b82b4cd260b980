use async_trait::async_trait;
use serde_json::Value;

use super::model::GeneratedRecipe;

/// Failure of the external completion service. Carries a description of the
/// underlying cause; callers re-wrap it before it reaches any public surface.
#[derive(Debug, thiserror::Error)]
#[error("completion.failed: {0}")]
pub struct CompletionError(pub String);

/// Service port for the external generative completion backend: given
/// natural-language instructions and contextual data, produce up to `n`
/// structurally valid recipe candidates. No retry logic lives behind this
/// port; a single failure surfaces as `CompletionError`.
#[async_trait]
pub trait RecipeCompletionService: Send + Sync {
    async fn complete(
        &self,
        instructions: &str,
        context: &Value,
        n: usize,
    ) -> Result<Vec<GeneratedRecipe>, CompletionError>;
}
