use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::ingredient::model::{Ingredient, StorageLocation};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum StorageLocationDto {
    #[oai(rename = "fridge")]
    Fridge,
    #[oai(rename = "cupboard")]
    Cupboard,
    #[oai(rename = "pantry")]
    Pantry,
}

impl From<StorageLocation> for StorageLocationDto {
    fn from(loc: StorageLocation) -> Self {
        match loc {
            StorageLocation::Fridge => StorageLocationDto::Fridge,
            StorageLocation::Cupboard => StorageLocationDto::Cupboard,
            StorageLocation::Pantry => StorageLocationDto::Pantry,
        }
    }
}

impl From<StorageLocationDto> for StorageLocation {
    fn from(dto: StorageLocationDto) -> Self {
        match dto {
            StorageLocationDto::Fridge => StorageLocation::Fridge,
            StorageLocationDto::Cupboard => StorageLocation::Cupboard,
            StorageLocationDto::Pantry => StorageLocation::Pantry,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateIngredientRequest {
    /// Ingredient name (cannot be empty, unique per pantry)
    pub name: String,
    /// Storage location
    pub storage_location: StorageLocationDto,
    /// Quantity on hand (cannot be negative)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<f64>,
    /// Unit for the quantity
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    /// Expiry date
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateIngredientRequest {
    /// New name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New storage location
    #[oai(skip_serializing_if_is_none)]
    pub storage_location: Option<StorageLocationDto>,
    /// New quantity
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<f64>,
    /// New unit
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    /// New expiry date
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    /// Ingredient unique identifier
    pub id: i64,
    /// Ingredient name
    pub name: String,
    /// Storage location
    pub storage_location: StorageLocationDto,
    /// Quantity on hand
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<f64>,
    /// Unit for the quantity
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    /// Expiry date
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(i: Ingredient) -> Self {
        Self {
            id: i.id,
            name: i.name,
            storage_location: i.storage_location.into(),
            quantity: i.quantity,
            unit: i.unit,
            expiry_date: i.expiry_date,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}
