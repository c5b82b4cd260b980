use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::delete::{DeleteIngredientParams, DeleteIngredientUseCase};
use crate::domain::logger::Logger;

pub struct DeleteIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteIngredientUseCase for DeleteIngredientUseCaseImpl {
    async fn execute(&self, params: DeleteIngredientParams) -> Result<(), IngredientError> {
        self.repository
            .soft_delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IngredientError::NotFound,
                other => IngredientError::Repository(other),
            })?;

        self.logger
            .info(&format!("Soft-deleted ingredient {}", params.id));
        Ok(())
    }
}
