use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::suggestion::model::GeneratedRecipe;

pub struct AcceptSuggestionParams {
    pub generated_recipe: GeneratedRecipe,
}

/// Persists an accepted AI-generated recipe into the catalog.
#[async_trait]
pub trait AcceptSuggestionUseCase: Send + Sync {
    async fn execute(&self, params: AcceptSuggestionParams) -> Result<Recipe, RecipeError>;
}
