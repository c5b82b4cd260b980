use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipe, Recipe};

pub struct CreateRecipeParams {
    pub recipe: NewRecipe,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError>;
}
