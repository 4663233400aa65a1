//! Error handling module for the Arteterapia backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and JSON error bodies.
//! Status codes are chosen from the error variant, never from the message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

/// Top-level message of every validation failure; the field list goes in `details`.
pub const VALIDATION_MESSAGE: &str = "Dados inválidos";

/// Which record a lookup failed to find.
///
/// The variant decides the status code; [`Missing::message`] is only presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Forum,
    Topic,
    Reply,
    /// Topic creation under a forum that does not exist.
    ParentForum,
    /// Reply creation under a topic that does not exist in the given forum.
    ParentTopic,
    Notice,
    SchoolData,
    User,
}

impl Missing {
    pub fn message(&self) -> &'static str {
        match self {
            Missing::Forum => "Fórum não encontrado",
            Missing::Topic => "Tópico não encontrado",
            Missing::Reply => "Resposta não encontrada",
            Missing::ParentForum => "Fórum pai não encontrado",
            Missing::ParentTopic => "Tópico pai não encontrado",
            Missing::Notice | Missing::SchoolData => "Dado não encontrado",
            Missing::User => "Usuário não encontrado",
        }
    }
}

/// A single schema violation reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed schema validation
    #[error("{}", VALIDATION_MESSAGE)]
    Validation(Vec<FieldError>),
    /// Malformed request outside the body schema (e.g. a non-numeric path id)
    #[error("{0}")]
    BadRequest(String),
    /// Authentication required or rejected
    #[error("{0}")]
    Unauthorized(String),
    /// Resource not found
    #[error("{}", .0.message())]
    NotFound(Missing),
    /// Uniqueness conflict
    #[error("{0}")]
    Conflict(String),
    /// Database error
    #[error("{0}")]
    Database(String),
    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Conflict(_) => codes::CONFLICT,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Replace an empty message on an unexpected error with `default`.
    ///
    /// Not-found, validation and other client errors always keep their own text.
    pub fn or_message(self, default: &str) -> Self {
        match self {
            AppError::Database(msg) if msg.trim().is_empty() => {
                AppError::Database(default.to_string())
            }
            AppError::Internal(msg) if msg.trim().is_empty() => {
                AppError::Internal(default.to_string())
            }
            other => other,
        }
    }

    /// Database errors are logged where they are converted; only internal
    /// errors are logged when the response is built.
    fn logged_on_response(&self) -> bool {
        matches!(self, AppError::Internal(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let path = field.to_string();
                errs.iter()
                    .map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        FieldError::new(path.clone(), message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        fields.sort_by(|a, b| a.path.cmp(&b.path));
        AppError::Validation(fields)
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::Validation(fields) => Some(fields.clone()),
            _ => None,
        };

        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.logged_on_response() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}
