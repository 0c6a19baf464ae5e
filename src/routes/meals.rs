//! Meal routes: owner-scoped CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::meal::{Meal, MealInput};
use crate::services::entries;
use crate::AppState;

/// GET /api/v1/meals: the current user's meals, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Meal>>>, AppError> {
    let meals = entries::list_meals(state.entries.as_ref(), user.id).await?;
    Ok(ApiResponse::success(meals))
}

/// POST /api/v1/meals: log a meal now.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<MealInput>,
) -> Result<Json<ApiResponse<Meal>>, AppError> {
    let meal = entries::create_meal(state.entries.as_ref(), user.id, body).await?;
    Ok(ApiResponse::success(meal))
}

/// GET /api/v1/meals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Meal>>, AppError> {
    let meal = entries::get_meal(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(meal))
}

/// PUT /api/v1/meals/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<MealInput>,
) -> Result<Json<ApiResponse<Meal>>, AppError> {
    let meal = entries::update_meal(state.entries.as_ref(), user.id, id, &body).await?;
    Ok(ApiResponse::success(meal))
}

/// DELETE /api/v1/meals/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Uuid>>, AppError> {
    entries::delete_meal(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(id))
}
