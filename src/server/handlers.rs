// API Handlers

use super::response::{ApiError, ApiResponse};
use super::ApiState;
use crate::recipe::{RecipeKey, RecipeModel};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

type ApiResult<T> = Result<T, ApiError>;

pub(super) async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("Recipe API is healthy"))
}

pub(super) async fn list_recipes(
    State(state): State<ApiState>,
) -> Json<ApiResponse<Vec<RecipeModel>>> {
    Json(ApiResponse::success(state.registry.list_all()))
}

pub(super) async fn create_recipe(
    State(state): State<ApiState>,
    payload: Result<Json<RecipeModel>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RecipeModel>>)> {
    let Json(model) = payload?;
    let created = state.registry.create(&model)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub(super) async fn get_recipe(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<Json<ApiResponse<RecipeModel>>> {
    let recipe = state.registry.get(&RecipeKey::from_string(key))?;
    Ok(Json(ApiResponse::success(recipe)))
}

pub(super) async fn update_recipe(
    State(state): State<ApiState>,
    Path(key): Path<String>,
    payload: Result<Json<RecipeModel>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<RecipeModel>>> {
    let Json(model) = payload?;
    let updated = state.registry.update(&RecipeKey::from_string(key), &model)?;
    Ok(Json(ApiResponse::success(updated)))
}

pub(super) async fn delete_recipe(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> Json<ApiResponse<Vec<RecipeModel>>> {
    Json(ApiResponse::success(
        state.registry.delete(&RecipeKey::from_string(key)),
    ))
}
