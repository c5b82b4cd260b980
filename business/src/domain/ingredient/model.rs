use chrono::{DateTime, NaiveDate, Utc};

use super::errors::IngredientError;

/// Where an ingredient is kept in the kitchen.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageLocation {
    Fridge,
    Cupboard,
    Pantry,
}

impl std::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageLocation::Fridge => write!(f, "fridge"),
            StorageLocation::Cupboard => write!(f, "cupboard"),
            StorageLocation::Pantry => write!(f, "pantry"),
        }
    }
}

impl std::str::FromStr for StorageLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fridge" => Ok(StorageLocation::Fridge),
            "cupboard" => Ok(StorageLocation::Cupboard),
            "pantry" => Ok(StorageLocation::Pantry),
            _ => Err(format!("Invalid storage location: {}", s)),
        }
    }
}

/// A pantry ingredient. Identifiers are database serials; `id` is only
/// meaningful for persisted ingredients.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub storage_location: StorageLocation,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for a not-yet-persisted ingredient.
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub name: String,
    pub storage_location: StorageLocation,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

impl NewIngredient {
    pub fn new(
        name: String,
        storage_location: StorageLocation,
        quantity: Option<f64>,
        unit: Option<String>,
        expiry_date: Option<NaiveDate>,
    ) -> Result<Self, IngredientError> {
        if name.trim().is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        if let Some(q) = quantity
            && q < 0.0
        {
            return Err(IngredientError::NegativeQuantity);
        }

        Ok(Self {
            name: name.trim().to_string(),
            storage_location,
            quantity,
            unit,
            expiry_date,
        })
    }
}

impl Ingredient {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        storage_location: StorageLocation,
        quantity: Option<f64>,
        unit: Option<String>,
        expiry_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            storage_location,
            quantity,
            unit,
            expiry_date,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_name_on_creation() {
        let ingredient = NewIngredient::new(
            "  Tomato  ".to_string(),
            StorageLocation::Fridge,
            Some(500.0),
            Some("g".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(ingredient.name, "Tomato");
    }

    #[test]
    fn should_reject_empty_name() {
        let result = NewIngredient::new("   ".to_string(), StorageLocation::Pantry, None, None, None);
        assert!(matches!(result, Err(IngredientError::NameEmpty)));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = NewIngredient::new(
            "Flour".to_string(),
            StorageLocation::Cupboard,
            Some(-1.0),
            Some("g".to_string()),
            None,
        );
        assert!(matches!(result, Err(IngredientError::NegativeQuantity)));
    }

    #[test]
    fn should_roundtrip_storage_location_labels() {
        for location in [
            StorageLocation::Fridge,
            StorageLocation::Cupboard,
            StorageLocation::Pantry,
        ] {
            let parsed: StorageLocation = location.to_string().parse().unwrap();
            assert_eq!(parsed, location);
        }
    }

    #[test]
    fn should_reject_unknown_storage_location() {
        assert!("freezer".parse::<StorageLocation>().is_err());
    }
}
