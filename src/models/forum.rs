//! Forum, topic and reply models plus their request schemas.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top-level discussion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub topics_count: i64,
    /// Server-assigned, epoch milliseconds
    pub created_at: i64,
}

/// A thread within a forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub forum_id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub replies_count: i64,
    pub created_at: i64,
}

/// A message within a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: i64,
    pub topic_id: i64,
    pub forum_id: i64,
    pub author: String,
    pub text: String,
    pub accepted: bool,
    pub created_at: i64,
}

// Required fields default to "" so that a missing field is reported by the
// length rule on its own path rather than as a body parse failure.

/// Request body for creating a new forum.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumRequest {
    #[serde(default)]
    #[validate(length(
        min = 3,
        message = "O nome é obrigatório e deve ter pelo menos 3 caracteres."
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 10,
        message = "A descrição é obrigatória e deve ter pelo menos 10 caracteres."
    ))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "A tag é obrigatória."))]
    pub tag: String,
}

/// Request body for a partial forum update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumRequest {
    #[serde(default)]
    #[validate(length(
        min = 3,
        message = "O nome é obrigatório e deve ter pelo menos 3 caracteres."
    ))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 10,
        message = "A descrição é obrigatória e deve ter pelo menos 10 caracteres."
    ))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "A tag é obrigatória."))]
    pub tag: Option<String>,
}

/// Request body for creating a topic under a forum.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    #[serde(default)]
    #[validate(length(
        min = 5,
        message = "O título é obrigatório e deve ter pelo menos 5 caracteres."
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(
        min = 3,
        message = "O autor é obrigatório e deve ter pelo menos 3 caracteres."
    ))]
    pub author: String,
    #[serde(default)]
    #[validate(length(
        min = 10,
        message = "O conteúdo é obrigatório e deve ter pelo menos 10 caracteres."
    ))]
    pub content: String,
}

/// Request body for a partial topic update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[serde(default)]
    #[validate(length(
        min = 5,
        message = "O título é obrigatório e deve ter pelo menos 5 caracteres."
    ))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 3,
        message = "O autor é obrigatório e deve ter pelo menos 3 caracteres."
    ))]
    pub author: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 10,
        message = "O conteúdo é obrigatório e deve ter pelo menos 10 caracteres."
    ))]
    pub content: Option<String>,
}

/// Request body for creating a reply under a topic.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "O autor é obrigatório."))]
    pub author: String,
    #[serde(default)]
    #[validate(length(
        min = 5,
        message = "O texto é obrigatório e deve ter pelo menos 5 caracteres."
    ))]
    pub text: String,
    #[serde(default)]
    pub accepted: bool,
}

/// Request body for a partial reply update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReplyRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "O autor é obrigatório."))]
    pub author: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 5,
        message = "O texto é obrigatório e deve ter pelo menos 5 caracteres."
    ))]
    pub text: Option<String>,
    #[serde(default)]
    pub accepted: Option<bool>,
}
