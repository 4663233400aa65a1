//! Notice endpoints under `/notice`.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, ok, MessageResult, ValidJson};
use crate::errors::AppError;
use crate::models::{CreateNoticeRequest, Notice, UpdateNoticeRequest};
use crate::service::NoticeService;
use crate::AppState;

/// POST /notice
pub async fn create_notice(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateNoticeRequest>,
) -> MessageResult {
    let message = NoticeService::new(&state.repo).create(&request).await?;
    created(message)
}

/// GET /notice
pub async fn list_notices(State(state): State<AppState>) -> Result<Json<Vec<Notice>>, AppError> {
    Ok(Json(NoticeService::new(&state.repo).list().await?))
}

/// GET /notice/{id}
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notice>, AppError> {
    Ok(Json(NoticeService::new(&state.repo).get(&id).await?))
}

/// PUT /notice/{id} - Partial update.
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(request): ValidJson<UpdateNoticeRequest>,
) -> MessageResult {
    let message = NoticeService::new(&state.repo).update(&id, &request).await?;
    ok(message)
}

/// DELETE /notice/{id}
pub async fn delete_notice(State(state): State<AppState>, Path(id): Path<String>) -> MessageResult {
    let message = NoticeService::new(&state.repo).delete(&id).await?;
    ok(message)
}
