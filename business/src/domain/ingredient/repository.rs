use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Ingredient, NewIngredient};

/// Read/write port over the ingredient store. Soft-deleted rows are never
/// returned by any query.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Ingredient, RepositoryError>;
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, RepositoryError>;
    async fn update(&self, ingredient: &Ingredient) -> Result<(), RepositoryError>;
    async fn soft_delete(&self, id: i64) -> Result<(), RepositoryError>;
}
