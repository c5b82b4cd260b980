use crate::domain::recipe::model::Difficulty;

use super::errors::{SuggestionError, SynthesisError};

/// Sentinel for a generated ingredient that could not be resolved against the
/// pantry. Downstream flows (e.g. accept) drop these lines.
pub const UNRESOLVED_INGREDIENT_ID: i64 = 0;

pub const MAX_RESULTS_LIMIT: usize = 20;
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A request for recipe suggestions. Immutable once constructed; fully
/// determines the cache key.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub available_ingredients: Vec<i64>,
    pub max_prep_time: Option<u32>,
    pub max_cook_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub dietary_restrictions: Vec<String>,
    pub max_results: usize,
}

impl SuggestionRequest {
    pub fn new(
        available_ingredients: Vec<i64>,
        max_prep_time: Option<u32>,
        max_cook_time: Option<u32>,
        difficulty: Option<Difficulty>,
        dietary_restrictions: Vec<String>,
        max_results: usize,
    ) -> Result<Self, SuggestionError> {
        if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
            return Err(SuggestionError::InvalidMaxResults);
        }
        if max_prep_time == Some(0) || max_cook_time == Some(0) {
            return Err(SuggestionError::InvalidTimeBound);
        }

        Ok(Self {
            available_ingredients,
            max_prep_time,
            max_cook_time,
            difficulty,
            dietary_restrictions,
            max_results,
        })
    }
}

/// Ingredient line inside an AI-generated recipe. `ingredient_id` stays at the
/// unresolved sentinel until a case-insensitive name lookup maps it to a
/// pantry ingredient.
#[derive(Debug, Clone)]
pub struct GeneratedRecipeIngredient {
    pub ingredient_id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe synthesized by the AI completion service. Instances only exist
/// after structural validation; raw model output never carries this type.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<GeneratedRecipeIngredient>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl GeneratedRecipe {
    /// Admits an untrusted candidate into the domain. Rejects empty
    /// name/instructions, empty ingredient lists, and non-positive quantities.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: Option<String>,
        instructions: String,
        ingredients: Vec<GeneratedRecipeIngredient>,
        prep_time_minutes: Option<u32>,
        cook_time_minutes: Option<u32>,
        servings: Option<u32>,
        difficulty: Option<Difficulty>,
    ) -> Result<Self, SynthesisError> {
        if name.trim().is_empty() || instructions.trim().is_empty() {
            return Err(SynthesisError::InvalidCandidate);
        }
        if ingredients.is_empty() {
            return Err(SynthesisError::InvalidCandidate);
        }
        if ingredients
            .iter()
            .any(|i| i.name.trim().is_empty() || i.quantity <= 0.0)
        {
            return Err(SynthesisError::InvalidCandidate);
        }

        Ok(Self {
            name: name.trim().to_string(),
            description,
            instructions,
            ingredients,
            prep_time_minutes,
            cook_time_minutes,
            servings,
            difficulty,
        })
    }
}

/// Where a suggestion list came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionSource {
    Ai,
    Heuristic,
}

impl std::fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionSource::Ai => write!(f, "ai"),
            SuggestionSource::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// A ranked suggestion. Either references a catalog recipe (`recipe_id` set)
/// or wraps a synthesized one (`recipe_id` absent, `generated_recipe` set).
#[derive(Debug, Clone)]
pub struct RecipeSuggestion {
    pub recipe_id: Option<i64>,
    pub recipe_name: String,
    /// Fraction of required ingredients satisfied, in [0.0, 1.0].
    pub match_score: f64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub reason: String,
    pub is_ai_generated: bool,
    pub generated_recipe: Option<GeneratedRecipe>,
}

/// Result of the suggestion orchestrator.
#[derive(Debug, Clone)]
pub struct SuggestionResult {
    pub suggestions: Vec<RecipeSuggestion>,
    pub source: SuggestionSource,
    pub cache_hit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: f64) -> GeneratedRecipeIngredient {
        GeneratedRecipeIngredient {
            ingredient_id: UNRESOLVED_INGREDIENT_ID,
            name: name.to_string(),
            quantity,
            unit: "g".to_string(),
        }
    }

    #[test]
    fn should_reject_zero_max_results() {
        let result = SuggestionRequest::new(vec![1], None, None, None, vec![], 0);
        assert!(matches!(result, Err(SuggestionError::InvalidMaxResults)));
    }

    #[test]
    fn should_reject_max_results_over_limit() {
        let result = SuggestionRequest::new(vec![1], None, None, None, vec![], 21);
        assert!(matches!(result, Err(SuggestionError::InvalidMaxResults)));
    }

    #[test]
    fn should_reject_zero_time_bounds() {
        let result = SuggestionRequest::new(vec![1], Some(0), None, None, vec![], 5);
        assert!(matches!(result, Err(SuggestionError::InvalidTimeBound)));
    }

    #[test]
    fn should_accept_request_within_bounds() {
        let request = SuggestionRequest::new(
            vec![3, 1, 2],
            Some(30),
            Some(60),
            Some(Difficulty::Easy),
            vec!["vegan".to_string()],
            MAX_RESULTS_LIMIT,
        );
        assert!(request.is_ok());
    }

    #[test]
    fn should_reject_generated_recipe_without_ingredients() {
        let result = GeneratedRecipe::new(
            "Pizza".to_string(),
            None,
            "Bake.".to_string(),
            vec![],
            None,
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(SynthesisError::InvalidCandidate)));
    }

    #[test]
    fn should_reject_generated_recipe_with_non_positive_quantity() {
        let result = GeneratedRecipe::new(
            "Pizza".to_string(),
            None,
            "Bake.".to_string(),
            vec![line("Flour", 0.0)],
            None,
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(SynthesisError::InvalidCandidate)));
    }

    #[test]
    fn should_reject_generated_recipe_with_blank_name() {
        let result = GeneratedRecipe::new(
            "  ".to_string(),
            None,
            "Bake.".to_string(),
            vec![line("Flour", 500.0)],
            None,
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(SynthesisError::InvalidCandidate)));
    }

    #[test]
    fn should_admit_valid_generated_recipe() {
        let recipe = GeneratedRecipe::new(
            " Caprese Salad ".to_string(),
            Some("Fresh".to_string()),
            "Slice and arrange.".to_string(),
            vec![line("Tomato", 2.0), line("Mozzarella", 200.0)],
            Some(10),
            None,
            Some(2),
            Some(Difficulty::Easy),
        )
        .unwrap();

        assert_eq!(recipe.name, "Caprese Salad");
        assert_eq!(recipe.ingredients.len(), 2);
    }
}
