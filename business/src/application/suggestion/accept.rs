use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipe, NewRecipeIngredient, Recipe};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::suggestion::model::UNRESOLVED_INGREDIENT_ID;
use crate::domain::suggestion::use_cases::accept::{AcceptSuggestionParams, AcceptSuggestionUseCase};

/// Persists an accepted AI-generated recipe into the catalog. Only
/// ingredients that were resolved against the pantry survive; unresolved
/// lines are dropped rather than inventing pantry entries.
pub struct AcceptSuggestionUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AcceptSuggestionUseCase for AcceptSuggestionUseCaseImpl {
    async fn execute(&self, params: AcceptSuggestionParams) -> Result<Recipe, RecipeError> {
        let generated = params.generated_recipe;

        let ingredients: Vec<NewRecipeIngredient> = generated
            .ingredients
            .into_iter()
            .filter(|i| i.ingredient_id != UNRESOLVED_INGREDIENT_ID)
            .map(|i| NewRecipeIngredient {
                ingredient_id: i.ingredient_id,
                quantity: i.quantity,
                unit: i.unit,
                is_optional: false,
                note: None,
            })
            .collect();

        let recipe = NewRecipe::new(
            generated.name,
            generated.description,
            generated.instructions,
            generated.prep_time_minutes,
            generated.cook_time_minutes,
            generated.servings.unwrap_or(1),
            generated.difficulty,
            ingredients,
        )?;

        let created = self.recipe_repository.create(recipe).await?;

        self.logger.info(&format!(
            "Accepted generated recipe '{}' as catalog recipe {}",
            created.name, created.id
        ));

        Ok(created)
    }
}
