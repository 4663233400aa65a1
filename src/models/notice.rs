//! Notice (announcement) model.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// Request body for creating a new notice.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "O conteúdo é obrigatório."))]
    pub content: String,
}

/// Request body for a partial notice update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoticeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "O conteúdo é obrigatório."))]
    pub content: Option<String>,
}
