use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::recipe::model::{
    Difficulty, NewRecipeIngredient, Recipe, RecipeIngredient,
};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum DifficultyDto {
    #[oai(rename = "easy")]
    Easy,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "hard")]
    Hard,
}

impl From<Difficulty> for DifficultyDto {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => DifficultyDto::Easy,
            Difficulty::Medium => DifficultyDto::Medium,
            Difficulty::Hard => DifficultyDto::Hard,
        }
    }
}

impl From<DifficultyDto> for Difficulty {
    fn from(dto: DifficultyDto) -> Self {
        match dto {
            DifficultyDto::Easy => Difficulty::Easy,
            DifficultyDto::Medium => Difficulty::Medium,
            DifficultyDto::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientRequest {
    /// Pantry ingredient ID
    pub ingredient_id: i64,
    /// Quantity required by the recipe (must be positive)
    pub quantity: f64,
    /// Unit for the quantity
    pub unit: String,
    /// Whether the ingredient is optional for matching purposes
    #[oai(default)]
    pub is_optional: bool,
    /// Free-form note (e.g. "finely chopped")
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
}

impl From<RecipeIngredientRequest> for NewRecipeIngredient {
    fn from(r: RecipeIngredientRequest) -> Self {
        Self {
            ingredient_id: r.ingredient_id,
            quantity: r.quantity,
            unit: r.unit,
            is_optional: r.is_optional,
            note: r.note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    /// Recipe name (cannot be empty)
    pub name: String,
    /// Brief description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Preparation instructions (cannot be empty)
    pub instructions: String,
    /// Preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub cook_time: Option<u32>,
    /// Number of servings (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub servings: Option<u32>,
    /// Difficulty label
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<DifficultyDto>,
    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredientRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    /// Pantry ingredient ID
    pub ingredient_id: i64,
    /// Ingredient display name
    pub ingredient_name: String,
    /// Quantity required by the recipe
    pub quantity: f64,
    /// Unit for the quantity
    pub unit: String,
    /// Whether the ingredient is optional
    pub is_optional: bool,
    /// Free-form note
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(r: RecipeIngredient) -> Self {
        Self {
            ingredient_id: r.ingredient_id,
            ingredient_name: r.ingredient_name,
            quantity: r.quantity,
            unit: r.unit,
            is_optional: r.is_optional,
            note: r.note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Recipe unique identifier
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Brief description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub cook_time: Option<u32>,
    /// Total time in minutes when any timing is known
    #[oai(skip_serializing_if_is_none)]
    pub total_time: Option<u32>,
    /// Number of servings
    pub servings: u32,
    /// Difficulty label
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<DifficultyDto>,
    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredientResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        let total_time = r.total_time();
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            instructions: r.instructions,
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            total_time,
            servings: r.servings,
            difficulty: r.difficulty.map(|d| d.into()),
            ingredients: r.ingredients.into_iter().map(|i| i.into()).collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
