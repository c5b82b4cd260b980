use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

#[async_trait]
pub trait GetAllIngredientsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Ingredient>, IngredientError>;
}
