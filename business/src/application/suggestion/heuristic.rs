use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::{Recipe, RecipeIngredient};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::suggestion::model::{RecipeSuggestion, SuggestionRequest};

/// Scores catalog recipes against the available ingredient set and applies
/// the hard constraint filters. Deterministic for a fixed catalog and
/// request; store errors propagate to the caller.
pub struct HeuristicMatcher {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

impl HeuristicMatcher {
    pub async fn match_recipes(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<RecipeSuggestion>, RepositoryError> {
        let candidates = self
            .recipe_repository
            .get_recipes_with_ingredients(&request.available_ingredients, 1)
            .await?;
        let available = self
            .ingredient_repository
            .get_by_ids(&request.available_ingredients)
            .await?;

        let available_names: HashSet<String> =
            available.iter().map(|i| i.name.to_lowercase()).collect();

        let mut suggestions: Vec<RecipeSuggestion> = candidates
            .iter()
            .filter(|recipe| Self::passes_filters(recipe, request))
            .filter_map(|recipe| Self::score_recipe(recipe, &available_names))
            .collect();

        // Stable sort keeps equal-score candidates in catalog order, so the
        // ranking is deterministic for the same input set.
        suggestions.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        suggestions.truncate(request.max_results);

        self.logger.debug(&format!(
            "Heuristic matcher produced {} suggestions from {} candidate recipes",
            suggestions.len(),
            candidates.len()
        ));

        Ok(suggestions)
    }

    /// Hard filters: each one vetoes the recipe outright, it is never
    /// down-ranked. A filter only applies when both sides are present.
    fn passes_filters(recipe: &Recipe, request: &SuggestionRequest) -> bool {
        if let (Some(max), Some(prep)) = (request.max_prep_time, recipe.prep_time)
            && prep > max
        {
            return false;
        }
        if let (Some(max), Some(cook)) = (request.max_cook_time, recipe.cook_time)
            && cook > max
        {
            return false;
        }
        if let (Some(wanted), Some(actual)) = (&request.difficulty, &recipe.difficulty)
            && wanted != actual
        {
            return false;
        }
        true
    }

    /// Scores one recipe against the available names. Recipes whose required
    /// ingredient list is empty have no defined score and are skipped.
    fn score_recipe(
        recipe: &Recipe,
        available_names: &HashSet<String>,
    ) -> Option<RecipeSuggestion> {
        let required: Vec<_> = recipe.ingredients.iter().filter(|i| !i.is_optional).collect();
        if required.is_empty() {
            return None;
        }

        let (matched, missing): (Vec<&&RecipeIngredient>, Vec<&&RecipeIngredient>) = required
            .iter()
            .partition(|i| available_names.contains(&i.ingredient_name.to_lowercase()));

        let matched_ingredients: Vec<String> =
            matched.iter().map(|i| i.ingredient_name.clone()).collect();
        let missing_ingredients: Vec<String> =
            missing.iter().map(|i| i.ingredient_name.clone()).collect();

        let match_score = matched_ingredients.len() as f64 / required.len() as f64;

        Some(RecipeSuggestion {
            recipe_id: Some(recipe.id),
            recipe_name: recipe.name.clone(),
            match_score,
            reason: format!(
                "Matches {}/{} required ingredients",
                matched_ingredients.len(),
                required.len()
            ),
            matched_ingredients,
            missing_ingredients,
            is_ai_generated: false,
            generated_recipe: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::{Ingredient, NewIngredient, StorageLocation};
    use crate::domain::recipe::model::{Difficulty, NewRecipe, RecipeIngredient};
    use crate::domain::suggestion::model::SuggestionRequest;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use mockall::mock;
    use proptest::prelude::*;

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

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient::from_repository(
            id,
            name.to_string(),
            StorageLocation::Fridge,
            Some(100.0),
            Some("g".to_string()),
            None::<NaiveDate>,
            Utc::now(),
            Utc::now(),
        )
    }

    fn association(name: &str, is_optional: bool) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: 0,
            ingredient_name: name.to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
            is_optional,
            note: None,
        }
    }

    fn recipe(id: i64, name: &str, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe::from_repository(
            id,
            name.to_string(),
            None,
            "Cook.".to_string(),
            Some(10),
            Some(20),
            2,
            None,
            ingredients,
            Utc::now(),
            Utc::now(),
        )
    }

    fn request(ids: Vec<i64>) -> SuggestionRequest {
        SuggestionRequest::new(ids, None, None, None, vec![], 5).unwrap()
    }

    fn matcher(
        recipes: Vec<Recipe>,
        ingredients: Vec<Ingredient>,
    ) -> HeuristicMatcher {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_recipes_with_ingredients()
            .returning(move |_, _| Ok(recipes.clone()));

        let mut ingredient_repo = MockIngredientRepo::new();
        ingredient_repo
            .expect_get_by_ids()
            .returning(move |_| Ok(ingredients.clone()));

        HeuristicMatcher {
            recipe_repository: Arc::new(recipe_repo),
            ingredient_repository: Arc::new(ingredient_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_score_partially_matched_recipe() {
        // Recipe A requires {Tomato, Basil}, only Tomato is on hand.
        let matcher = matcher(
            vec![recipe(
                1,
                "Recipe A",
                vec![association("Tomato", false), association("Basil", false)],
            )],
            vec![ingredient(1, "Tomato")],
        );

        let suggestions = matcher.match_recipes(&request(vec![1])).await.unwrap();

        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.recipe_id, Some(1));
        assert_eq!(s.match_score, 0.5);
        assert_eq!(s.matched_ingredients, vec!["Tomato".to_string()]);
        assert_eq!(s.missing_ingredients, vec!["Basil".to_string()]);
        assert_eq!(s.reason, "Matches 1/2 required ingredients");
        assert!(!s.is_ai_generated);
    }

    #[tokio::test]
    async fn should_ignore_optional_ingredients_in_score() {
        let matcher = matcher(
            vec![recipe(
                1,
                "Pasta",
                vec![
                    association("Pasta", false),
                    association("Parmesan", true),
                    association("Chili flakes", true),
                ],
            )],
            vec![ingredient(1, "Pasta")],
        );

        let suggestions = matcher.match_recipes(&request(vec![1])).await.unwrap();

        assert_eq!(suggestions[0].match_score, 1.0);
        assert!(suggestions[0].missing_ingredients.is_empty());
    }

    #[tokio::test]
    async fn should_skip_recipes_with_no_required_ingredients() {
        let matcher = matcher(
            vec![recipe(1, "Garnish", vec![association("Parsley", true)])],
            vec![ingredient(1, "Parsley")],
        );

        let suggestions = matcher.match_recipes(&request(vec![1])).await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn should_match_ingredient_names_case_insensitively() {
        let matcher = matcher(
            vec![recipe(1, "Salad", vec![association("tomato", false)])],
            vec![ingredient(1, "Tomato")],
        );

        let suggestions = matcher.match_recipes(&request(vec![1])).await.unwrap();
        assert_eq!(suggestions[0].match_score, 1.0);
    }

    #[tokio::test]
    async fn should_veto_recipes_exceeding_time_limits() {
        let mut slow = recipe(1, "Stew", vec![association("Beef", false)]);
        slow.cook_time = Some(120);
        let fast = recipe(2, "Steak", vec![association("Beef", false)]);

        let matcher = matcher(vec![slow, fast], vec![ingredient(1, "Beef")]);

        let mut request = request(vec![1]);
        request.max_cook_time = Some(30);

        let suggestions = matcher.match_recipes(&request).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].recipe_id, Some(2));
    }

    #[tokio::test]
    async fn should_veto_recipes_with_mismatched_difficulty() {
        let mut hard = recipe(1, "Souffle", vec![association("Egg", false)]);
        hard.difficulty = Some(Difficulty::Hard);
        let mut easy = recipe(2, "Omelette", vec![association("Egg", false)]);
        easy.difficulty = Some(Difficulty::Easy);
        // No difficulty on the recipe means the filter does not apply.
        let unlabeled = recipe(3, "Scramble", vec![association("Egg", false)]);

        let matcher = matcher(vec![hard, easy, unlabeled], vec![ingredient(1, "Egg")]);

        let mut request = request(vec![1]);
        request.difficulty = Some(Difficulty::Easy);

        let suggestions = matcher.match_recipes(&request).await.unwrap();
        let ids: Vec<_> = suggestions.iter().map(|s| s.recipe_id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn should_rank_by_score_and_truncate_to_max_results() {
        let recipes = vec![
            recipe(
                1,
                "Half",
                vec![association("Tomato", false), association("Basil", false)],
            ),
            recipe(2, "Full", vec![association("Tomato", false)]),
            recipe(
                3,
                "Third",
                vec![
                    association("Tomato", false),
                    association("Basil", false),
                    association("Mozzarella", false),
                ],
            ),
            recipe(4, "Also full", vec![association("Tomato", false)]),
            recipe(
                5,
                "Also half",
                vec![association("Tomato", false), association("Garlic", false)],
            ),
        ];

        let matcher = matcher(recipes, vec![ingredient(1, "Tomato")]);

        let mut request = request(vec![1]);
        request.max_results = 2;

        let suggestions = matcher.match_recipes(&request).await.unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].recipe_id, Some(2));
        assert_eq!(suggestions[1].recipe_id, Some(4));
    }

    #[tokio::test]
    async fn should_be_deterministic_across_calls() {
        let recipes = vec![
            recipe(1, "A", vec![association("Tomato", false)]),
            recipe(2, "B", vec![association("Tomato", false)]),
            recipe(
                3,
                "C",
                vec![association("Tomato", false), association("Basil", false)],
            ),
        ];
        let matcher = matcher(recipes, vec![ingredient(1, "Tomato")]);
        let request = request(vec![1]);

        let first = matcher.match_recipes(&request).await.unwrap();
        let second = matcher.match_recipes(&request).await.unwrap();

        let order = |s: &[RecipeSuggestion]| {
            s.iter()
                .map(|x| (x.recipe_id, x.match_score.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&first), order(&second));
    }

    #[tokio::test]
    async fn should_propagate_store_errors() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_recipes_with_ingredients()
            .returning(|_, _| Err(RepositoryError::DatabaseError));
        let ingredient_repo = MockIngredientRepo::new();

        let matcher = HeuristicMatcher {
            recipe_repository: Arc::new(recipe_repo),
            ingredient_repository: Arc::new(ingredient_repo),
            logger: mock_logger(),
        };

        let result = matcher.match_recipes(&request(vec![1])).await;
        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    proptest! {
        #[test]
        fn score_is_always_within_unit_interval(
            required_names in proptest::collection::vec("[a-z]{1,8}", 1..10),
            available_names in proptest::collection::hash_set("[a-z]{1,8}", 0..10),
        ) {
            let associations: Vec<_> = required_names
                .iter()
                .map(|n| association(n, false))
                .collect();
            let candidate = recipe(1, "Any", associations);

            let suggestion = HeuristicMatcher::score_recipe(&candidate, &available_names)
                .expect("non-empty required list always yields a score");

            prop_assert!(suggestion.match_score >= 0.0);
            prop_assert!(suggestion.match_score <= 1.0);
        }
    }
}
