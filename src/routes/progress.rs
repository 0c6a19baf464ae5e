//! Body progress routes: owner-scoped CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::progress::{Progress, ProgressInput};
use crate::services::entries;
use crate::AppState;

/// GET /api/v1/progress: the current user's measurements, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Progress>>>, AppError> {
    let progress = entries::list_progress(state.entries.as_ref(), user.id).await?;
    Ok(ApiResponse::success(progress))
}

/// POST /api/v1/progress
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<ProgressInput>,
) -> Result<Json<ApiResponse<Progress>>, AppError> {
    let progress = entries::create_progress(state.entries.as_ref(), user.id, body).await?;
    Ok(ApiResponse::success(progress))
}

/// GET /api/v1/progress/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Progress>>, AppError> {
    let progress = entries::get_progress(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(progress))
}

/// PUT /api/v1/progress/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ProgressInput>,
) -> Result<Json<ApiResponse<Progress>>, AppError> {
    let progress = entries::update_progress(state.entries.as_ref(), user.id, id, &body).await?;
    Ok(ApiResponse::success(progress))
}

/// DELETE /api/v1/progress/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Uuid>>, AppError> {
    entries::delete_progress(state.entries.as_ref(), user.id, id).await?;
    Ok(ApiResponse::success(id))
}
