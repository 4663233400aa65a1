//! User account model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A note a user attached to an item of course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentNote {
    #[validate(length(min = 1, message = "O conteúdo é obrigatório."))]
    pub content_id: String,
    pub item_id: i64,
    pub note: String,
}

/// Marks an item of course content as finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompletedContent {
    #[validate(length(min = 1, message = "O conteúdo é obrigatório."))]
    pub content_id: String,
    pub item_id: i64,
}

/// Personal and billing details. Stored as one JSON document per user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the server
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub pending_update_password: bool,
    pub completed_content: Vec<CompletedContent>,
    pub content_notes: Vec<ContentNote>,
    pub created_at: String,
}

/// Request body for registering a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "O nome é obrigatório."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "E-mail inválido."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "A senha deve ter pelo menos 6 caracteres."))]
    pub password: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Request body for a partial user update. The email itself is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "O nome é obrigatório."))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 6, message = "A senha deve ter pelo menos 6 caracteres."))]
    pub password: Option<String>,
    #[serde(default)]
    pub pending_update_password: Option<bool>,
    #[serde(flatten)]
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
