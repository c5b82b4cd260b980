use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, StorageLocation};

pub struct UpdateIngredientParams {
    pub id: i64,
    pub name: Option<String>,
    pub storage_location: Option<StorageLocation>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

#[async_trait]
pub trait UpdateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: UpdateIngredientParams) -> Result<Ingredient, IngredientError>;
}
