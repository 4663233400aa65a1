//! Forum, topic and reply endpoints under `/forum`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{created, ok, parse_id, MessageResult, ValidJson};
use crate::errors::AppError;
use crate::models::{
    CreateForumRequest, CreateReplyRequest, CreateTopicRequest, Forum, Reply, Topic,
    UpdateForumRequest, UpdateReplyRequest, UpdateTopicRequest,
};
use crate::service::{forum::FORUM_CREATED, ForumService};
use crate::AppState;

const INVALID_FORUM_ID: &str = "ID do Fórum inválido.";
const INVALID_TOPIC_ID: &str = "ID do Tópico inválido.";
const INVALID_REPLY_ID: &str = "ID da Resposta inválido.";

fn forum_id(raw: &str) -> Result<i64, AppError> {
    parse_id(raw, INVALID_FORUM_ID)
}

fn topic_ids(raw_forum: &str, raw_topic: &str) -> Result<(i64, i64), AppError> {
    Ok((forum_id(raw_forum)?, parse_id(raw_topic, INVALID_TOPIC_ID)?))
}

fn reply_ids(raw_forum: &str, raw_topic: &str, raw_reply: &str) -> Result<(i64, i64, i64), AppError> {
    let (forum_id, topic_id) = topic_ids(raw_forum, raw_topic)?;
    Ok((forum_id, topic_id, parse_id(raw_reply, INVALID_REPLY_ID)?))
}

// ==================== FORUMS ====================

/// POST /forum - Create a forum.
pub async fn create_forum(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateForumRequest>,
) -> MessageResult {
    ForumService::new(&state.repo).create_forum(&request).await?;
    created(FORUM_CREATED)
}

/// GET /forum - List all forums.
pub async fn list_forums(State(state): State<AppState>) -> Result<Json<Vec<Forum>>, AppError> {
    Ok(Json(ForumService::new(&state.repo).list_forums().await?))
}

/// GET /forum/{forumId}
pub async fn get_forum(
    State(state): State<AppState>,
    Path(raw_forum): Path<String>,
) -> Result<Json<Forum>, AppError> {
    let forum_id = forum_id(&raw_forum)?;
    Ok(Json(ForumService::new(&state.repo).get_forum(forum_id).await?))
}

/// PATCH /forum/{forumId} - Partial update.
pub async fn update_forum(
    State(state): State<AppState>,
    Path(raw_forum): Path<String>,
    ValidJson(request): ValidJson<UpdateForumRequest>,
) -> Result<Json<Forum>, AppError> {
    let forum_id = forum_id(&raw_forum)?;
    let forum = ForumService::new(&state.repo)
        .update_forum(forum_id, &request)
        .await?;
    Ok(Json(forum))
}

/// DELETE /forum/{forumId} - Delete a forum with all its topics and replies.
pub async fn delete_forum(
    State(state): State<AppState>,
    Path(raw_forum): Path<String>,
) -> MessageResult {
    let forum_id = forum_id(&raw_forum)?;
    let message = ForumService::new(&state.repo).delete_forum(forum_id).await?;
    ok(message)
}

// ==================== TOPICS ====================

/// POST /forum/{forumId}/topics
pub async fn create_topic(
    State(state): State<AppState>,
    Path(raw_forum): Path<String>,
    ValidJson(request): ValidJson<CreateTopicRequest>,
) -> Result<(StatusCode, Json<Topic>), AppError> {
    let forum_id = forum_id(&raw_forum)?;
    let topic = ForumService::new(&state.repo)
        .create_topic(forum_id, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// GET /forum/{forumId}/topics
pub async fn list_topics(
    State(state): State<AppState>,
    Path(raw_forum): Path<String>,
) -> Result<Json<Vec<Topic>>, AppError> {
    let forum_id = forum_id(&raw_forum)?;
    Ok(Json(ForumService::new(&state.repo).list_topics(forum_id).await?))
}

/// GET /forum/{forumId}/topics/{topicId}
pub async fn get_topic(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic)): Path<(String, String)>,
) -> Result<Json<Topic>, AppError> {
    let (forum_id, topic_id) = topic_ids(&raw_forum, &raw_topic)?;
    let topic = ForumService::new(&state.repo)
        .get_topic(forum_id, topic_id)
        .await?;
    Ok(Json(topic))
}

/// PATCH /forum/{forumId}/topics/{topicId}
pub async fn update_topic(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic)): Path<(String, String)>,
    ValidJson(request): ValidJson<UpdateTopicRequest>,
) -> Result<Json<Topic>, AppError> {
    let (forum_id, topic_id) = topic_ids(&raw_forum, &raw_topic)?;
    let topic = ForumService::new(&state.repo)
        .update_topic(forum_id, topic_id, &request)
        .await?;
    Ok(Json(topic))
}

/// DELETE /forum/{forumId}/topics/{topicId}
pub async fn delete_topic(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic)): Path<(String, String)>,
) -> MessageResult {
    let (forum_id, topic_id) = topic_ids(&raw_forum, &raw_topic)?;
    let message = ForumService::new(&state.repo)
        .delete_topic(forum_id, topic_id)
        .await?;
    ok(message)
}

// ==================== REPLIES ====================

/// POST /forum/{forumId}/topics/{topicId}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic)): Path<(String, String)>,
    ValidJson(request): ValidJson<CreateReplyRequest>,
) -> Result<(StatusCode, Json<Reply>), AppError> {
    let (forum_id, topic_id) = topic_ids(&raw_forum, &raw_topic)?;
    let reply = ForumService::new(&state.repo)
        .create_reply(forum_id, topic_id, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// GET /forum/{forumId}/topics/{topicId}/replies
pub async fn list_replies(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic)): Path<(String, String)>,
) -> Result<Json<Vec<Reply>>, AppError> {
    let (forum_id, topic_id) = topic_ids(&raw_forum, &raw_topic)?;
    let replies = ForumService::new(&state.repo)
        .list_replies(forum_id, topic_id)
        .await?;
    Ok(Json(replies))
}

pub async fn get_reply(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic, raw_reply)): Path<(String, String, String)>,
) -> Result<Json<Reply>, AppError> {
    let (forum_id, topic_id, reply_id) = reply_ids(&raw_forum, &raw_topic, &raw_reply)?;
    let reply = ForumService::new(&state.repo)
        .get_reply(forum_id, topic_id, reply_id)
        .await?;
    Ok(Json(reply))
}

pub async fn update_reply(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic, raw_reply)): Path<(String, String, String)>,
    ValidJson(request): ValidJson<UpdateReplyRequest>,
) -> Result<Json<Reply>, AppError> {
    let (forum_id, topic_id, reply_id) = reply_ids(&raw_forum, &raw_topic, &raw_reply)?;
    let reply = ForumService::new(&state.repo)
        .update_reply(forum_id, topic_id, reply_id, &request)
        .await?;
    Ok(Json(reply))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    Path((raw_forum, raw_topic, raw_reply)): Path<(String, String, String)>,
) -> MessageResult {
    let (forum_id, topic_id, reply_id) = reply_ids(&raw_forum, &raw_topic, &raw_reply)?;
    let message = ForumService::new(&state.repo)
        .delete_reply(forum_id, topic_id, reply_id)
        .await?;
    ok(message)
}
