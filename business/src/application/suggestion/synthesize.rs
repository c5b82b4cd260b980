use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SynthesisError;
use crate::domain::suggestion::model::{GeneratedRecipe, RecipeSuggestion, SuggestionRequest};
use crate::domain::suggestion::services::RecipeCompletionService;

const AI_REASON: &str = "AI-generated creative recipe based on your ingredients";

/// Synthesizes a novel recipe from the available ingredients via the external
/// completion service, validates it against the request, resolves ingredient
/// ids, and scores it the same way the heuristic matcher scores a catalog
/// recipe.
pub struct RecipeSynthesizer {
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub completion: Arc<dyn RecipeCompletionService>,
    pub logger: Arc<dyn Logger>,
}

impl RecipeSynthesizer {
    pub async fn synthesize(
        &self,
        request: &SuggestionRequest,
    ) -> Result<RecipeSuggestion, SynthesisError> {
        if request.available_ingredients.is_empty() {
            return Err(SynthesisError::NoIngredients);
        }

        let available = self
            .ingredient_repository
            .get_by_ids(&request.available_ingredients)
            .await?;
        if available.is_empty() {
            return Err(SynthesisError::NoIngredients);
        }

        let instructions = Self::build_instructions(request, &available);
        let context = Self::build_context(request, &available);

        // Exactly one candidate; a single failure means fallback, never retry.
        let candidates = self
            .completion
            .complete(&instructions, &context, 1)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Recipe completion failed: {}", err));
                SynthesisError::CompletionFailed(err.to_string())
            })?;

        let mut recipe = candidates
            .into_iter()
            .next()
            .ok_or_else(|| SynthesisError::CompletionFailed("no candidates returned".into()))?;

        let by_name: HashMap<String, &Ingredient> = available
            .iter()
            .map(|i| (i.name.to_lowercase(), i))
            .collect();

        // The candidate must use at least one requested ingredient; an
        // unrelated recipe is rejected, never silently accepted.
        if !recipe
            .ingredients
            .iter()
            .any(|i| by_name.contains_key(&i.name.to_lowercase()))
        {
            return Err(SynthesisError::UnrelatedRecipe);
        }

        // Resolve pantry ids by case-insensitive name. Names the pantry does
        // not know keep the unresolved sentinel.
        for line in &mut recipe.ingredients {
            if let Some(found) = by_name.get(&line.name.to_lowercase()) {
                line.ingredient_id = found.id;
            }
        }

        let (matched, missing): (Vec<_>, Vec<_>) = recipe
            .ingredients
            .iter()
            .partition(|i| by_name.contains_key(&i.name.to_lowercase()));
        let match_score = matched.len() as f64 / recipe.ingredients.len() as f64;

        Ok(RecipeSuggestion {
            recipe_id: None,
            recipe_name: recipe.name.clone(),
            match_score,
            matched_ingredients: matched.iter().map(|i| i.name.clone()).collect(),
            missing_ingredients: missing.iter().map(|i| i.name.clone()).collect(),
            reason: AI_REASON.to_string(),
            is_ai_generated: true,
            generated_recipe: Some(recipe),
        })
    }

    fn build_instructions(request: &SuggestionRequest, available: &[Ingredient]) -> String {
        let names: Vec<&str> = available.iter().map(|i| i.name.as_str()).collect();

        let mut instructions = format!(
            "Create one realistic recipe using some or all of these available \
             ingredients: {}. Prefer using as many of them as possible.",
            names.join(", ")
        );

        if let Some(difficulty) = &request.difficulty {
            instructions.push_str(&format!(" The recipe should be {} difficulty.", difficulty));
        }
        if let Some(max) = request.max_prep_time {
            instructions.push_str(&format!(" Preparation must take at most {} minutes.", max));
        }
        if let Some(max) = request.max_cook_time {
            instructions.push_str(&format!(" Cooking must take at most {} minutes.", max));
        }
        if !request.dietary_restrictions.is_empty() {
            instructions.push_str(&format!(
                " Respect these dietary restrictions: {}.",
                request.dietary_restrictions.join(", ")
            ));
        }

        instructions
    }

    fn build_context(request: &SuggestionRequest, available: &[Ingredient]) -> serde_json::Value {
        json!({
            "available_ingredients": available.iter().map(|i| &i.name).collect::<Vec<_>>(),
            "max_prep_time": request.max_prep_time,
            "max_cook_time": request.max_cook_time,
            "difficulty": request.difficulty.as_ref().map(|d| d.to_string()),
            "dietary_restrictions": request.dietary_restrictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::{NewIngredient, StorageLocation};
    use crate::domain::recipe::model::Difficulty;
    use crate::domain::suggestion::model::{
        GeneratedRecipeIngredient, UNRESOLVED_INGREDIENT_ID,
    };
    use crate::domain::suggestion::services::CompletionError;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use serde_json::Value;

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
        pub Completion {}

        #[async_trait]
        impl RecipeCompletionService for Completion {
            async fn complete(
                &self,
                instructions: &str,
                context: &Value,
                n: usize,
            ) -> Result<Vec<GeneratedRecipe>, CompletionError>;
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

    fn pantry() -> Vec<Ingredient> {
        [(1, "Tomato"), (2, "Basil"), (3, "Mozzarella")]
            .into_iter()
            .map(|(id, name)| {
                Ingredient::from_repository(
                    id,
                    name.to_string(),
                    StorageLocation::Fridge,
                    Some(100.0),
                    Some("g".to_string()),
                    None,
                    Utc::now(),
                    Utc::now(),
                )
            })
            .collect()
    }

    fn line(name: &str) -> GeneratedRecipeIngredient {
        GeneratedRecipeIngredient {
            ingredient_id: UNRESOLVED_INGREDIENT_ID,
            name: name.to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
        }
    }

    fn caprese() -> GeneratedRecipe {
        GeneratedRecipe::new(
            "Caprese Salad".to_string(),
            Some("Fresh Italian salad".to_string()),
            "Slice, arrange, drizzle.".to_string(),
            vec![line("tomato"), line("Mozzarella"), line("Olive oil")],
            Some(10),
            None,
            Some(2),
            Some(Difficulty::Easy),
        )
        .unwrap()
    }

    fn request(ids: Vec<i64>) -> SuggestionRequest {
        SuggestionRequest::new(ids, None, None, None, vec![], 5).unwrap()
    }

    fn synthesizer(
        ingredients: Vec<Ingredient>,
        completion: MockCompletion,
    ) -> RecipeSynthesizer {
        let mut repo = MockIngredientRepo::new();
        repo.expect_get_by_ids()
            .returning(move |_| Ok(ingredients.clone()));

        RecipeSynthesizer {
            ingredient_repository: Arc::new(repo),
            completion: Arc::new(completion),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_reject_empty_ingredient_set_before_any_io() {
        let repo = MockIngredientRepo::new();
        let completion = MockCompletion::new();
        let synthesizer = RecipeSynthesizer {
            ingredient_repository: Arc::new(repo),
            completion: Arc::new(completion),
            logger: mock_logger(),
        };

        let result = synthesizer.synthesize(&request(vec![])).await;
        assert!(matches!(result, Err(SynthesisError::NoIngredients)));
    }

    #[tokio::test]
    async fn should_reject_when_ids_resolve_to_no_known_ingredients() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().never();
        let synthesizer = synthesizer(vec![], completion);

        let result = synthesizer.synthesize(&request(vec![99])).await;
        assert!(matches!(result, Err(SynthesisError::NoIngredients)));
    }

    #[tokio::test]
    async fn should_wrap_suggestion_with_resolved_ids_and_score() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .withf(|_, _, n| *n == 1)
            .returning(|_, _, _| Ok(vec![caprese()]));

        let synthesizer = synthesizer(pantry(), completion);
        let suggestion = synthesizer
            .synthesize(&request(vec![1, 2, 3]))
            .await
            .unwrap();

        assert!(suggestion.is_ai_generated);
        assert_eq!(suggestion.recipe_id, None);
        assert_eq!(suggestion.recipe_name, "Caprese Salad");
        // 2 of 3 candidate ingredients are on hand.
        assert!((suggestion.match_score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            suggestion.matched_ingredients,
            vec!["tomato".to_string(), "Mozzarella".to_string()]
        );
        assert_eq!(suggestion.missing_ingredients, vec!["Olive oil".to_string()]);
        assert_eq!(
            suggestion.reason,
            "AI-generated creative recipe based on your ingredients"
        );

        let generated = suggestion.generated_recipe.unwrap();
        // Case-insensitive resolution: "tomato" -> id 1, unknown keeps sentinel.
        assert_eq!(generated.ingredients[0].ingredient_id, 1);
        assert_eq!(generated.ingredients[1].ingredient_id, 3);
        assert_eq!(
            generated.ingredients[2].ingredient_id,
            UNRESOLVED_INGREDIENT_ID
        );
    }

    #[tokio::test]
    async fn should_reject_candidate_using_no_requested_ingredient() {
        let unrelated = GeneratedRecipe::new(
            "Pizza".to_string(),
            None,
            "Bake.".to_string(),
            vec![line("Flour"), line("Yeast")],
            None,
            None,
            None,
            None,
        )
        .unwrap();

        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(move |_, _, _| Ok(vec![unrelated.clone()]));

        let synthesizer = synthesizer(pantry(), completion);
        let result = synthesizer.synthesize(&request(vec![1, 2, 3])).await;

        assert!(matches!(result, Err(SynthesisError::UnrelatedRecipe)));
    }

    #[tokio::test]
    async fn should_wrap_adapter_failures_preserving_cause() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_, _, _| Err(CompletionError("rate limit exceeded".to_string())));

        let synthesizer = synthesizer(pantry(), completion);
        let result = synthesizer.synthesize(&request(vec![1])).await;

        match result {
            Err(SynthesisError::CompletionFailed(cause)) => {
                assert!(cause.contains("rate limit exceeded"));
            }
            other => panic!("expected CompletionFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_fail_when_adapter_returns_no_candidates() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().returning(|_, _, _| Ok(vec![]));

        let synthesizer = synthesizer(pantry(), completion);
        let result = synthesizer.synthesize(&request(vec![1])).await;

        assert!(matches!(result, Err(SynthesisError::CompletionFailed(_))));
    }

    #[tokio::test]
    async fn should_propagate_store_errors() {
        let mut repo = MockIngredientRepo::new();
        repo.expect_get_by_ids()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let synthesizer = RecipeSynthesizer {
            ingredient_repository: Arc::new(repo),
            completion: Arc::new(MockCompletion::new()),
            logger: mock_logger(),
        };

        let result = synthesizer.synthesize(&request(vec![1])).await;
        assert!(matches!(
            result,
            Err(SynthesisError::Repository(RepositoryError::DatabaseError))
        ));
    }

    #[test]
    fn should_fold_constraints_into_instructions() {
        let request = SuggestionRequest::new(
            vec![1, 2],
            Some(20),
            Some(40),
            Some(Difficulty::Easy),
            vec!["vegan".to_string()],
            5,
        )
        .unwrap();

        let instructions = RecipeSynthesizer::build_instructions(&request, &pantry());

        assert!(instructions.contains("Tomato, Basil, Mozzarella"));
        assert!(instructions.contains("easy difficulty"));
        assert!(instructions.contains("at most 20 minutes"));
        assert!(instructions.contains("at most 40 minutes"));
        assert!(instructions.contains("vegan"));
    }
}
