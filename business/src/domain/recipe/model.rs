use chrono::{DateTime, Utc};

use super::errors::RecipeError;

/// Recipe difficulty label.
#[derive(Debug, Clone, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

/// Association between a recipe and one of its ingredients. The ingredient
/// display name is denormalized so matching never needs a second lookup.
#[derive(Debug, Clone)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub is_optional: bool,
    pub note: Option<String>,
}

/// A catalog recipe with its ingredient associations.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: u32,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<RecipeIngredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Total time in minutes when any timing is known.
    pub fn total_time(&self) -> Option<u32> {
        match (self.prep_time, self.cook_time) {
            (Some(p), Some(c)) => Some(p + c),
            (Some(p), None) => Some(p),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        description: Option<String>,
        instructions: String,
        prep_time: Option<u32>,
        cook_time: Option<u32>,
        servings: u32,
        difficulty: Option<Difficulty>,
        ingredients: Vec<RecipeIngredient>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            instructions,
            prep_time,
            cook_time,
            servings,
            difficulty,
            ingredients,
            created_at,
            updated_at,
        }
    }
}

/// Ingredient line for a not-yet-persisted recipe.
#[derive(Debug, Clone)]
pub struct NewRecipeIngredient {
    pub ingredient_id: i64,
    pub quantity: f64,
    pub unit: String,
    pub is_optional: bool,
    pub note: Option<String>,
}

/// Validated payload for a not-yet-persisted recipe.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: u32,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<NewRecipeIngredient>,
}

impl NewRecipe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: Option<String>,
        instructions: String,
        prep_time: Option<u32>,
        cook_time: Option<u32>,
        servings: u32,
        difficulty: Option<Difficulty>,
        ingredients: Vec<NewRecipeIngredient>,
    ) -> Result<Self, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::NameEmpty);
        }
        if instructions.trim().is_empty() {
            return Err(RecipeError::InstructionsEmpty);
        }
        if servings == 0 {
            return Err(RecipeError::InvalidServings);
        }
        if ingredients.iter().any(|i| i.quantity <= 0.0) {
            return Err(RecipeError::InvalidIngredientQuantity);
        }

        Ok(Self {
            name: name.trim().to_string(),
            description,
            instructions,
            prep_time,
            cook_time,
            servings,
            difficulty,
            ingredients,
        })
    }
}
