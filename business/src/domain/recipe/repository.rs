use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewRecipe, Recipe};

/// Read/write port over the recipe catalog. Recipes are always returned with
/// their ingredient associations loaded. Soft-deleted recipes are invisible.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError>;

    /// Recipes containing at least `min_match_count` of the given ingredients.
    async fn get_recipes_with_ingredients(
        &self,
        ingredient_ids: &[i64],
        min_match_count: u32,
    ) -> Result<Vec<Recipe>, RepositoryError>;

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepositoryError>;
    async fn soft_delete(&self, id: i64) -> Result<(), RepositoryError>;
}
