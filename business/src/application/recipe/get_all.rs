use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_all::GetAllRecipesUseCase;

pub struct GetAllRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRecipesUseCase for GetAllRecipesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Recipe>, RecipeError> {
        let recipes = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} recipes", recipes.len()));
        Ok(recipes)
    }
}
