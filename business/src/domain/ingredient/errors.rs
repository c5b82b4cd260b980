use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.negative_quantity")]
    NegativeQuantity,
    #[error("ingredient.duplicated_name")]
    DuplicatedName,
    #[error("ingredient.not_found")]
    NotFound,
    #[error("ingredient.repository")]
    Repository(#[from] RepositoryError),
}
