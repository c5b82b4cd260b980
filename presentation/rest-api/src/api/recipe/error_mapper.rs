use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.name_empty",
            ),
            RecipeError::InstructionsEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.instructions_empty",
            ),
            RecipeError::InvalidServings => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_servings",
            ),
            RecipeError::InvalidIngredientQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_ingredient_quantity",
            ),
            RecipeError::UnknownIngredient => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "recipe.unknown_ingredient",
            ),
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "recipe.not_found"),
            RecipeError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
