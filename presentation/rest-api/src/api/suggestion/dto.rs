use poem_openapi::Object;

use business::domain::suggestion::model::{
    GeneratedRecipe, GeneratedRecipeIngredient, RecipeSuggestion, SuggestionResult,
    UNRESOLVED_INGREDIENT_ID,
};

use crate::api::recipe::dto::DifficultyDto;

#[derive(Debug, Clone, Object)]
pub struct SuggestRecipesRequest {
    /// Pantry ingredient IDs available for cooking
    pub ingredient_ids: Vec<i64>,
    /// Maximum number of suggestions to return (1-20, default: 5)
    #[oai(skip_serializing_if_is_none)]
    pub max_results: Option<u32>,
    /// Whether to attempt AI synthesis on top of heuristic matching
    /// (default: true)
    #[oai(skip_serializing_if_is_none)]
    pub prefer_ai: Option<bool>,
    /// Upper bound on preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub max_prep_time: Option<u32>,
    /// Upper bound on cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub max_cook_time: Option<u32>,
    /// Required difficulty label
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<DifficultyDto>,
    /// Dietary restrictions to respect (e.g. "vegan")
    #[oai(skip_serializing_if_is_none)]
    pub dietary_restrictions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct GeneratedIngredientResponse {
    /// Pantry ingredient ID, or 0 when the name did not resolve
    pub ingredient_id: i64,
    /// Ingredient name as produced by the model
    pub name: String,
    /// Quantity
    pub quantity: f64,
    /// Unit for the quantity
    pub unit: String,
}

impl From<GeneratedRecipeIngredient> for GeneratedIngredientResponse {
    fn from(i: GeneratedRecipeIngredient) -> Self {
        Self {
            ingredient_id: i.ingredient_id,
            name: i.name,
            quantity: i.quantity,
            unit: i.unit,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GeneratedRecipeResponse {
    /// Recipe name
    pub name: String,
    /// Brief description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Ingredient lines
    pub ingredients: Vec<GeneratedIngredientResponse>,
    /// Preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub prep_time_minutes: Option<u32>,
    /// Cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub cook_time_minutes: Option<u32>,
    /// Number of servings
    #[oai(skip_serializing_if_is_none)]
    pub servings: Option<u32>,
    /// Difficulty label
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<DifficultyDto>,
}

impl From<GeneratedRecipe> for GeneratedRecipeResponse {
    fn from(r: GeneratedRecipe) -> Self {
        Self {
            name: r.name,
            description: r.description,
            instructions: r.instructions,
            ingredients: r.ingredients.into_iter().map(|i| i.into()).collect(),
            prep_time_minutes: r.prep_time_minutes,
            cook_time_minutes: r.cook_time_minutes,
            servings: r.servings,
            difficulty: r.difficulty.map(|d| d.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeSuggestionResponse {
    /// Catalog recipe ID; absent for AI-generated suggestions
    #[oai(skip_serializing_if_is_none)]
    pub recipe_id: Option<i64>,
    /// Recipe name
    pub recipe_name: String,
    /// Fraction of required ingredients satisfied, in [0.0, 1.0]
    pub match_score: f64,
    /// Required ingredients available in the pantry
    pub matched_ingredients: Vec<String>,
    /// Required ingredients missing from the pantry
    pub missing_ingredients: Vec<String>,
    /// Human-readable explanation of the ranking
    pub reason: String,
    /// Whether this suggestion was synthesized by the AI
    pub is_ai_generated: bool,
    /// Full recipe payload for AI-generated suggestions
    #[oai(skip_serializing_if_is_none)]
    pub generated_recipe: Option<GeneratedRecipeResponse>,
}

impl From<RecipeSuggestion> for RecipeSuggestionResponse {
    fn from(s: RecipeSuggestion) -> Self {
        Self {
            recipe_id: s.recipe_id,
            recipe_name: s.recipe_name,
            match_score: s.match_score,
            matched_ingredients: s.matched_ingredients,
            missing_ingredients: s.missing_ingredients,
            reason: s.reason,
            is_ai_generated: s.is_ai_generated,
            generated_recipe: s.generated_recipe.map(|r| r.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionResultResponse {
    /// Ranked suggestions, best first
    pub suggestions: Vec<RecipeSuggestionResponse>,
    /// Origin of the list: "ai" or "heuristic"
    pub source: String,
    /// Whether the result was served from the cache
    pub cache_hit: bool,
}

impl From<SuggestionResult> for SuggestionResultResponse {
    fn from(r: SuggestionResult) -> Self {
        Self {
            source: r.source.to_string(),
            cache_hit: r.cache_hit,
            suggestions: r.suggestions.into_iter().map(|s| s.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AcceptIngredientRequest {
    /// Pantry ingredient ID; omit when the ingredient is not in the pantry
    #[oai(skip_serializing_if_is_none)]
    pub ingredient_id: Option<i64>,
    /// Ingredient name
    pub name: String,
    /// Quantity (must be positive)
    pub quantity: f64,
    /// Unit for the quantity
    pub unit: String,
}

impl From<AcceptIngredientRequest> for GeneratedRecipeIngredient {
    fn from(i: AcceptIngredientRequest) -> Self {
        Self {
            ingredient_id: i.ingredient_id.unwrap_or(UNRESOLVED_INGREDIENT_ID),
            name: i.name,
            quantity: i.quantity,
            unit: i.unit,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AcceptSuggestionRequest {
    /// Recipe name (cannot be empty)
    pub name: String,
    /// Brief description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Preparation instructions (cannot be empty)
    pub instructions: String,
    /// Ingredient lines (cannot be empty)
    pub ingredients: Vec<AcceptIngredientRequest>,
    /// Preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub prep_time_minutes: Option<u32>,
    /// Cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub cook_time_minutes: Option<u32>,
    /// Number of servings
    #[oai(skip_serializing_if_is_none)]
    pub servings: Option<u32>,
    /// Difficulty label
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<DifficultyDto>,
}
