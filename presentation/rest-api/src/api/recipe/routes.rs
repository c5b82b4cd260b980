use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::NewRecipe;
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_all::GetAllRecipesUseCase;
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{CreateRecipeRequest, RecipeResponse};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    get_all_use_case: Arc<dyn GetAllRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        get_all_use_case: Arc<dyn GetAllRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// Recipe catalog API
///
/// Endpoints for creating, reading, and deleting catalog recipes.
#[OpenApi]
impl RecipeApi {
    /// Create a new recipe
    ///
    /// Creates a recipe with its ingredient lines. Every referenced
    /// ingredient must exist in the pantry.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create_recipe(&self, body: Json<CreateRecipeRequest>) -> CreateRecipeResponse {
        let recipe = match NewRecipe::new(
            body.0.name,
            body.0.description,
            body.0.instructions,
            body.0.prep_time,
            body.0.cook_time,
            body.0.servings.unwrap_or(1),
            body.0.difficulty.map(|d| d.into()),
            body.0.ingredients.into_iter().map(|i| i.into()).collect(),
        ) {
            Ok(recipe) => recipe,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return CreateRecipeResponse::BadRequest(json);
            }
        };

        match self
            .create_use_case
            .execute(CreateRecipeParams { recipe })
            .await
        {
            Ok(recipe) => CreateRecipeResponse::Created(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    422 => CreateRecipeResponse::UnprocessableEntity(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// List all recipes
    ///
    /// Returns all recipes that have not been deleted, with their
    /// ingredient lines.
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    async fn get_all_recipes(&self) -> GetAllRecipesResponse {
        match self.get_all_use_case.execute().await {
            Ok(recipes) => {
                let responses: Vec<RecipeResponse> =
                    recipes.into_iter().map(|r| r.into()).collect();
                GetAllRecipesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllRecipesResponse::InternalError(json)
            }
        }
    }

    /// Get a recipe by ID
    ///
    /// Returns a single recipe by its unique identifier.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe_by_id(&self, id: Path<i64>) -> GetRecipeByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetRecipeByIdParams { id: id.0 })
            .await
        {
            Ok(recipe) => GetRecipeByIdResponse::Ok(Json(recipe.into())),
            Err(err) => match err {
                RecipeError::NotFound => {
                    let (_, json) = err.into_error_response();
                    GetRecipeByIdResponse::NotFound(json)
                }
                _ => {
                    let (_, json) = err.into_error_response();
                    GetRecipeByIdResponse::InternalError(json)
                }
            },
        }
    }

    /// Delete a recipe
    ///
    /// Soft-deletes the recipe from the catalog.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete_recipe(&self, id: Path<i64>) -> DeleteRecipeResponse {
        match self
            .delete_use_case
            .execute(DeleteRecipeParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
