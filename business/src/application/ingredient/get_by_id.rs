use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientByIdUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientByIdUseCase for GetIngredientByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientByIdParams,
    ) -> Result<Ingredient, IngredientError> {
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IngredientError::NotFound,
                other => IngredientError::Repository(other),
            })
    }
}
