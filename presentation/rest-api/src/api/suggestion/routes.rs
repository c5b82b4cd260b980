use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::model::{
    DEFAULT_MAX_RESULTS, GeneratedRecipe, SuggestionRequest,
};
use business::domain::suggestion::use_cases::accept::{
    AcceptSuggestionParams, AcceptSuggestionUseCase,
};
use business::domain::suggestion::use_cases::get_suggestions::{
    GetSuggestionsParams, GetSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeResponse;
use crate::api::suggestion::dto::{
    AcceptSuggestionRequest, SuggestRecipesRequest, SuggestionResultResponse,
};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    get_suggestions_use_case: Arc<dyn GetSuggestionsUseCase>,
    accept_use_case: Arc<dyn AcceptSuggestionUseCase>,
}

impl SuggestionApi {
    pub fn new(
        get_suggestions_use_case: Arc<dyn GetSuggestionsUseCase>,
        accept_use_case: Arc<dyn AcceptSuggestionUseCase>,
    ) -> Self {
        Self {
            get_suggestions_use_case,
            accept_use_case,
        }
    }
}

/// Suggestion API
///
/// Endpoints for ranking catalog recipes against the pantry and for
/// accepting AI-generated recipes into the catalog.
#[OpenApi]
impl SuggestionApi {
    /// Suggest recipes for the available ingredients
    ///
    /// Ranks catalog recipes by how many of their required ingredients are
    /// available. When AI synthesis is enabled and succeeds, a generated
    /// recipe is prepended; AI failures degrade to heuristic-only results.
    #[oai(
        path = "/suggestions/recipes",
        method = "post",
        tag = "ApiTags::Suggestions"
    )]
    async fn suggest_recipes(&self, body: Json<SuggestRecipesRequest>) -> SuggestRecipesResponse {
        let max_results = body
            .0
            .max_results
            .map(|m| m as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS);
        let prefer_ai = body.0.prefer_ai.unwrap_or(true);

        let request = match SuggestionRequest::new(
            body.0.ingredient_ids,
            body.0.max_prep_time,
            body.0.max_cook_time,
            body.0.difficulty.map(|d| d.into()),
            body.0.dietary_restrictions.unwrap_or_default(),
            max_results,
        ) {
            Ok(request) => request,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return SuggestRecipesResponse::BadRequest(json);
            }
        };

        match self
            .get_suggestions_use_case
            .execute(GetSuggestionsParams { request, prefer_ai })
            .await
        {
            Ok(result) => SuggestRecipesResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SuggestRecipesResponse::BadRequest(json),
                    _ => SuggestRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// Accept an AI-generated recipe
    ///
    /// Persists a generated recipe into the catalog. Ingredient lines that
    /// never resolved against the pantry are dropped.
    #[oai(
        path = "/suggestions/accept",
        method = "post",
        tag = "ApiTags::Suggestions"
    )]
    async fn accept_suggestion(
        &self,
        body: Json<AcceptSuggestionRequest>,
    ) -> AcceptSuggestionResponse {
        let generated_recipe = match GeneratedRecipe::new(
            body.0.name,
            body.0.description,
            body.0.instructions,
            body.0.ingredients.into_iter().map(|i| i.into()).collect(),
            body.0.prep_time_minutes,
            body.0.cook_time_minutes,
            body.0.servings,
            body.0.difficulty.map(|d| d.into()),
        ) {
            Ok(recipe) => recipe,
            Err(_) => {
                return AcceptSuggestionResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "suggestion.invalid_generated_recipe",
                )));
            }
        };

        match self
            .accept_use_case
            .execute(AcceptSuggestionParams { generated_recipe })
            .await
        {
            Ok(recipe) => AcceptSuggestionResponse::Created(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AcceptSuggestionResponse::BadRequest(json),
                    422 => AcceptSuggestionResponse::UnprocessableEntity(json),
                    _ => AcceptSuggestionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionResultResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AcceptSuggestionResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
