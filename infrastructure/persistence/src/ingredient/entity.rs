use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::ingredient::model::{Ingredient, StorageLocation};

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: i64,
    pub name: String,
    pub storage_location: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient::from_repository(
            self.id,
            self.name,
            self.storage_location
                .parse::<StorageLocation>()
                .unwrap_or(StorageLocation::Pantry),
            self.quantity,
            self.unit,
            self.expiry_date,
            self.created_at,
            self.updated_at,
        )
    }
}
