//! REST API module.
//!
//! Contains all API routes and handlers following the web client's contract.

mod forum;
mod notices;
mod school;
mod users;

pub use forum::*;
pub use notices::*;
pub use school::*;
pub use users::*;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::errors::{AppError, FieldError};

/// `{ "message": ... }` body returned by mutations that do not echo the entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub type MessageResult = Result<(StatusCode, Json<MessageResponse>), AppError>;

pub fn created(message: &str) -> MessageResult {
    respond(StatusCode::CREATED, message)
}

pub fn ok(message: &str) -> MessageResult {
    respond(StatusCode::OK, message)
}

fn respond(status: StatusCode, message: &str) -> MessageResult {
    Ok((
        status,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    ))
}

/// JSON body extractor that also runs the body's validation rules.
///
/// Malformed JSON is reported as a single violation with an empty path, so every
/// body failure has the same response shape.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::Validation(vec![FieldError::new("", rejection.body_text())])
            })?;

        value.validate()?;
        Ok(ValidJson(value))
    }
}

/// Parse a numeric path id. Anything but a plain integer is a 400 with `message`.
pub fn parse_id(raw: &str, message: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}
