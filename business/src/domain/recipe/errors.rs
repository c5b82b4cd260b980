use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.instructions_empty")]
    InstructionsEmpty,
    #[error("recipe.invalid_servings")]
    InvalidServings,
    #[error("recipe.invalid_ingredient_quantity")]
    InvalidIngredientQuantity,
    #[error("recipe.unknown_ingredient")]
    UnknownIngredient,
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.repository")]
    Repository(#[from] RepositoryError),
}
