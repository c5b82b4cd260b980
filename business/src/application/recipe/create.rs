use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError> {
        let recipe = params.recipe;

        // All referenced ingredients must exist in the pantry.
        let ids: Vec<i64> = recipe.ingredients.iter().map(|i| i.ingredient_id).collect();
        if !ids.is_empty() {
            let known = self.ingredient_repository.get_by_ids(&ids).await?;
            if known.len() != {
                let mut unique = ids.clone();
                unique.sort_unstable();
                unique.dedup();
                unique.len()
            } {
                return Err(RecipeError::UnknownIngredient);
            }
        }

        let created = self.repository.create(recipe).await?;
        self.logger
            .info(&format!("Created recipe {} ({})", created.name, created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::{Ingredient, NewIngredient, StorageLocation};
    use crate::domain::recipe::model::{NewRecipe, NewRecipeIngredient};
    use chrono::Utc;
    use mockall::mock;

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
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Ingredient, RepositoryError>;
            async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
            async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, RepositoryError>;
            async fn update(&self, ingredient: &Ingredient) -> Result<(), RepositoryError>;
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

    fn new_recipe(ingredient_ids: Vec<i64>) -> NewRecipe {
        NewRecipe::new(
            "Soup".to_string(),
            None,
            "Simmer.".to_string(),
            Some(10),
            Some(20),
            2,
            None,
            ingredient_ids
                .into_iter()
                .map(|id| NewRecipeIngredient {
                    ingredient_id: id,
                    quantity: 100.0,
                    unit: "g".to_string(),
                    is_optional: false,
                    note: None,
                })
                .collect(),
        )
        .unwrap()
    }

    fn pantry_ingredient(id: i64) -> Ingredient {
        Ingredient::from_repository(
            id,
            format!("Ingredient {}", id),
            StorageLocation::Pantry,
            None,
            None,
            None,
            Utc::now(),
            Utc::now(),
        )
    }

    fn persisted(recipe: &NewRecipe) -> Recipe {
        Recipe::from_repository(
            7,
            recipe.name.clone(),
            None,
            recipe.instructions.clone(),
            recipe.prep_time,
            recipe.cook_time,
            recipe.servings,
            None,
            vec![],
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_create_recipe_when_all_ingredients_exist() {
        let mut ingredient_repo = MockIngredientRepo::new();
        ingredient_repo
            .expect_get_by_ids()
            .returning(|ids| Ok(ids.iter().map(|id| pantry_ingredient(*id)).collect()));

        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_create()
            .returning(|recipe| Ok(persisted(&recipe)));

        let use_case = CreateRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            ingredient_repository: Arc::new(ingredient_repo),
            logger: mock_logger(),
        };

        let created = use_case
            .execute(CreateRecipeParams {
                recipe: new_recipe(vec![1, 2]),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn should_reject_recipe_referencing_unknown_ingredient() {
        let mut ingredient_repo = MockIngredientRepo::new();
        // Only id 1 exists.
        ingredient_repo
            .expect_get_by_ids()
            .returning(|_| Ok(vec![pantry_ingredient(1)]));

        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_create().never();

        let use_case = CreateRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            ingredient_repository: Arc::new(ingredient_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecipeParams {
                recipe: new_recipe(vec![1, 99]),
            })
            .await;
        assert!(matches!(result, Err(RecipeError::UnknownIngredient)));
    }
}
