use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SuggestionError::InvalidMaxResults => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "suggestion.invalid_max_results",
            ),
            SuggestionError::InvalidTimeBound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "suggestion.invalid_time_bound",
            ),
            SuggestionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
