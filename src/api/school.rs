//! School enrollment endpoints under `/school-data`.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, ok, MessageResult, ValidJson};
use crate::errors::AppError;
use crate::models::{SchoolData, SchoolDataRequest};
use crate::service::SchoolDataService;
use crate::AppState;

pub async fn create_school_data(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<SchoolDataRequest>,
) -> MessageResult {
    let message = SchoolDataService::new(&state.repo).create(&request).await?;
    created(message)
}

pub async fn list_school_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchoolData>>, AppError> {
    Ok(Json(SchoolDataService::new(&state.repo).list().await?))
}

pub async fn get_school_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SchoolData>, AppError> {
    Ok(Json(SchoolDataService::new(&state.repo).get(&id).await?))
}

/// PUT /school-data/{id} - An absent `courseList` keeps the stored one.
pub async fn update_school_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(request): ValidJson<SchoolDataRequest>,
) -> MessageResult {
    let message = SchoolDataService::new(&state.repo)
        .update(&id, &request)
        .await?;
    ok(message)
}

pub async fn delete_school_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> MessageResult {
    let message = SchoolDataService::new(&state.repo).delete(&id).await?;
    ok(message)
}
