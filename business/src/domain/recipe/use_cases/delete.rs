use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;

pub struct DeleteRecipeParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError>;
}
