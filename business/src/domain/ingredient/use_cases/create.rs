use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, NewIngredient};

pub struct CreateIngredientParams {
    pub ingredient: NewIngredient,
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError>;
}
