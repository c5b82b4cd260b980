use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            IngredientError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "ingredient.name_empty",
            ),
            IngredientError::NegativeQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "ingredient.negative_quantity",
            ),
            IngredientError::DuplicatedName => (
                StatusCode::CONFLICT,
                "ConflictError",
                "ingredient.duplicated_name",
            ),
            IngredientError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "ingredient.not_found")
            }
            IngredientError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
