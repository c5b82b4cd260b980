use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::update::{UpdateIngredientParams, UpdateIngredientUseCase};
use crate::domain::logger::Logger;

pub struct UpdateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateIngredientUseCase for UpdateIngredientUseCaseImpl {
    async fn execute(&self, params: UpdateIngredientParams) -> Result<Ingredient, IngredientError> {
        let mut ingredient =
            self.repository
                .get_by_id(params.id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => IngredientError::NotFound,
                    other => IngredientError::Repository(other),
                })?;

        if let Some(name) = params.name {
            if name.trim().is_empty() {
                return Err(IngredientError::NameEmpty);
            }
            let name = name.trim().to_string();
            // Renaming to a name another ingredient already uses is rejected.
            if let Some(existing) = self.repository.get_by_name(&name).await?
                && existing.id != ingredient.id
            {
                return Err(IngredientError::DuplicatedName);
            }
            ingredient.name = name;
        }
        if let Some(location) = params.storage_location {
            ingredient.storage_location = location;
        }
        if let Some(quantity) = params.quantity {
            if quantity < 0.0 {
                return Err(IngredientError::NegativeQuantity);
            }
            ingredient.quantity = Some(quantity);
        }
        if let Some(unit) = params.unit {
            ingredient.unit = Some(unit);
        }
        if let Some(date) = params.expiry_date {
            ingredient.expiry_date = Some(date);
        }
        ingredient.updated_at = Utc::now();

        self.repository.update(&ingredient).await?;
        self.logger
            .info(&format!("Updated ingredient {}", ingredient.id));
        Ok(ingredient)
    }
}
