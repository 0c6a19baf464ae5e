//! Workout routes: owner-scoped CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::workout::{Workout, WorkoutInput};
use crate::services::entries;
use crate::AppState;

/// GET /api/v1/workouts: the current user's workouts, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Workout>>>, AppError> {
    let workouts = entries::list_workouts(state.entries.as_ref(), user.id).await?;
    Ok(ApiResponse::success(workouts))
}

/// POST /api/v1/workouts
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<WorkoutInput>,
) -> Result<Json<ApiResponse<Workout>>, AppError> {
    let workout = entries::create_workout(state.entries.as_ref(), user.id, body).await?;
    Ok(ApiResponse::success(workout))
}

/// GET /api/v1/workouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Workout>>, AppError> {
    let workout = entries::get_workout(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(workout))
}

/// PUT /api/v1/workouts/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<WorkoutInput>,
) -> Result<Json<ApiResponse<Workout>>, AppError> {
    let workout = entries::update_workout(state.entries.as_ref(), user.id, id, &body).await?;
    Ok(ApiResponse::success(workout))
}

/// DELETE /api/v1/workouts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Uuid>>, AppError> {
    entries::delete_workout(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(id))
}
