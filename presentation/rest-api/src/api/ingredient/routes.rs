use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::ingredient::model::NewIngredient;
use business::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use business::domain::ingredient::use_cases::delete::{
    DeleteIngredientParams, DeleteIngredientUseCase,
};
use business::domain::ingredient::use_cases::get_all::GetAllIngredientsUseCase;
use business::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use business::domain::ingredient::use_cases::update::{
    UpdateIngredientParams, UpdateIngredientUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::{
    CreateIngredientRequest, IngredientResponse, UpdateIngredientRequest,
};
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    create_use_case: Arc<dyn CreateIngredientUseCase>,
    get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
    update_use_case: Arc<dyn UpdateIngredientUseCase>,
    delete_use_case: Arc<dyn DeleteIngredientUseCase>,
}

impl IngredientApi {
    pub fn new(
        create_use_case: Arc<dyn CreateIngredientUseCase>,
        get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
        update_use_case: Arc<dyn UpdateIngredientUseCase>,
        delete_use_case: Arc<dyn DeleteIngredientUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Ingredient management API
///
/// Endpoints for creating, reading, updating, and deleting pantry ingredients.
#[OpenApi]
impl IngredientApi {
    /// Create a new ingredient
    ///
    /// Creates a new ingredient in the pantry. Names are unique,
    /// case-insensitively.
    #[oai(path = "/ingredients", method = "post", tag = "ApiTags::Ingredients")]
    async fn create_ingredient(
        &self,
        body: Json<CreateIngredientRequest>,
    ) -> CreateIngredientResponse {
        let ingredient = match NewIngredient::new(
            body.0.name,
            body.0.storage_location.into(),
            body.0.quantity,
            body.0.unit,
            body.0.expiry_date,
        ) {
            Ok(ingredient) => ingredient,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return CreateIngredientResponse::BadRequest(json);
            }
        };

        match self
            .create_use_case
            .execute(CreateIngredientParams { ingredient })
            .await
        {
            Ok(ingredient) => CreateIngredientResponse::Created(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateIngredientResponse::BadRequest(json),
                    409 => CreateIngredientResponse::Conflict(json),
                    _ => CreateIngredientResponse::InternalError(json),
                }
            }
        }
    }

    /// List all ingredients
    ///
    /// Returns all ingredients that have not been deleted, ordered by name.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_all_ingredients(&self) -> GetAllIngredientsResponse {
        match self.get_all_use_case.execute().await {
            Ok(ingredients) => {
                let responses: Vec<IngredientResponse> =
                    ingredients.into_iter().map(|i| i.into()).collect();
                GetAllIngredientsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Get an ingredient by ID
    ///
    /// Returns a single ingredient by its unique identifier.
    #[oai(
        path = "/ingredients/:id",
        method = "get",
        tag = "ApiTags::Ingredients"
    )]
    async fn get_ingredient_by_id(&self, id: Path<i64>) -> GetIngredientByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetIngredientByIdParams { id: id.0 })
            .await
        {
            Ok(ingredient) => GetIngredientByIdResponse::Ok(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetIngredientByIdResponse::NotFound(json),
                    _ => GetIngredientByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an ingredient
    ///
    /// Applies a partial update; omitted fields keep their current values.
    #[oai(
        path = "/ingredients/:id",
        method = "put",
        tag = "ApiTags::Ingredients"
    )]
    async fn update_ingredient(
        &self,
        id: Path<i64>,
        body: Json<UpdateIngredientRequest>,
    ) -> UpdateIngredientResponse {
        let params = UpdateIngredientParams {
            id: id.0,
            name: body.0.name,
            storage_location: body.0.storage_location.map(|l| l.into()),
            quantity: body.0.quantity,
            unit: body.0.unit,
            expiry_date: body.0.expiry_date,
        };

        match self.update_use_case.execute(params).await {
            Ok(ingredient) => UpdateIngredientResponse::Ok(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateIngredientResponse::BadRequest(json),
                    404 => UpdateIngredientResponse::NotFound(json),
                    409 => UpdateIngredientResponse::Conflict(json),
                    _ => UpdateIngredientResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an ingredient
    ///
    /// Soft-deletes the ingredient; existing recipes keep their associations.
    #[oai(
        path = "/ingredients/:id",
        method = "delete",
        tag = "ApiTags::Ingredients"
    )]
    async fn delete_ingredient(&self, id: Path<i64>) -> DeleteIngredientResponse {
        match self
            .delete_use_case
            .execute(DeleteIngredientParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteIngredientResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteIngredientResponse::NotFound(json),
                    _ => DeleteIngredientResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateIngredientResponse {
    #[oai(status = 201)]
    Created(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientByIdResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateIngredientResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteIngredientResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
