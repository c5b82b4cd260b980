use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_all::GetAllIngredientsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllIngredientsUseCase for GetAllIngredientsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Ingredient>, IngredientError> {
        let ingredients = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} ingredients", ingredients.len()));
        Ok(ingredients)
    }
}
