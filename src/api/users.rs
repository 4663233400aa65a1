//! User account endpoints under `/user`. Users are addressed by email.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, ok, MessageResult, ValidJson};
use crate::errors::AppError;
use crate::models::{
    CompletedContent, ContentNote, CreateUserRequest, LoginRequest, UpdateUserRequest, User,
};
use crate::service::UserService;
use crate::AppState;

/// POST /user - Register a user.
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateUserRequest>,
) -> MessageResult {
    let message = UserService::new(&state.repo).create(&request).await?;
    created(message)
}

/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(UserService::new(&state.repo).list().await?))
}

/// GET /user/{email}
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    Ok(Json(UserService::new(&state.repo).get(&email).await?))
}

/// PUT /user/{email} - Partial update; the email itself cannot change.
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidJson(request): ValidJson<UpdateUserRequest>,
) -> MessageResult {
    let message = UserService::new(&state.repo)
        .update(&email, &request)
        .await?;
    ok(message)
}

/// DELETE /user/{email}
pub async fn delete_user(State(state): State<AppState>, Path(email): Path<String>) -> MessageResult {
    let message = UserService::new(&state.repo).delete(&email).await?;
    ok(message)
}

/// POST /user/login - Returns the user on a password match.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let user = UserService::new(&state.repo)
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(user))
}

/// POST /user/{email}/content-note
pub async fn add_content_note(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidJson(note): ValidJson<ContentNote>,
) -> MessageResult {
    let message = UserService::new(&state.repo)
        .add_content_note(&email, &note)
        .await?;
    ok(message)
}

/// POST /user/{email}/completed-content
pub async fn add_completed_content(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidJson(completed): ValidJson<CompletedContent>,
) -> MessageResult {
    let message = UserService::new(&state.repo)
        .add_completed_content(&email, &completed)
        .await?;
    ok(message)
}
