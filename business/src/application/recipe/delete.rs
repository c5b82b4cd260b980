use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        self.repository
            .soft_delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        self.logger.info(&format!("Soft-deleted recipe {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::{NewRecipe, Recipe};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError>;
            async fn get_recipes_with_ingredients(
                &self,
                ingredient_ids: &[i64],
                min_match_count: u32,
            ) -> Result<Vec<Recipe>, RepositoryError>;
            async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepositoryError>;
            async fn soft_delete(&self, id: i64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_soft_delete_recipe_by_id() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_soft_delete()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteRecipeParams { id: 8 }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_map_missing_row_to_not_found() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_soft_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteRecipeParams { id: 99 }).await;
        assert!(matches!(result, Err(RecipeError::NotFound)));
    }

    #[tokio::test]
    async fn should_propagate_store_errors() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_soft_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteRecipeParams { id: 1 }).await;
        assert!(matches!(
            result,
            Err(RecipeError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
