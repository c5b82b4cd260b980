use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::create::{CreateIngredientParams, CreateIngredientUseCase};
use crate::domain::logger::Logger;

pub struct CreateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientUseCase for CreateIngredientUseCaseImpl {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError> {
        // Names are unique across the pantry.
        if self
            .repository
            .get_by_name(&params.ingredient.name)
            .await?
            .is_some()
        {
            return Err(IngredientError::DuplicatedName);
        }

        let created = self.repository.create(params.ingredient).await?;
        self.logger
            .info(&format!("Created ingredient {} ({})", created.name, created.id));
        Ok(created)
    }
}
