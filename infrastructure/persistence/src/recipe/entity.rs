use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::recipe::model::{Difficulty, Recipe, RecipeIngredient};

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One recipe/ingredient association row joined with the ingredient name.
#[derive(Debug, FromRow)]
pub struct RecipeIngredientEntity {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub is_optional: bool,
    pub note: Option<String>,
}

impl RecipeEntity {
    pub fn into_domain(self, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe::from_repository(
            self.id,
            self.name,
            self.description,
            self.instructions,
            self.prep_time.map(|t| t as u32),
            self.cook_time.map(|t| t as u32),
            self.servings.max(1) as u32,
            self.difficulty.and_then(|d| d.parse::<Difficulty>().ok()),
            ingredients,
            self.created_at,
            self.updated_at,
        )
    }
}

impl RecipeIngredientEntity {
    pub fn into_domain(self) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
            quantity: self.quantity,
            unit: self.unit,
            is_optional: self.is_optional,
            note: self.note,
        }
    }
}
