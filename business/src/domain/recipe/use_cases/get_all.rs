use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

#[async_trait]
pub trait GetAllRecipesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Recipe>, RecipeError>;
}
