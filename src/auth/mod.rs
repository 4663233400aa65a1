//! Request authentication and password hashing.
//!
//! The optional pre-shared key is compared in constant time to mitigate timing attacks.

mod password;

pub use password::{hash_password, verify_password};

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// PSK authentication layer function that takes the expected PSK as a parameter.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // No PSK configured: the API is open
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    let authorized = provided_key(&request).map(|key| constant_time_compare(key, &expected));

    match authorized {
        Some(true) => next.run(request).await,
        Some(false) => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API key");
            AppError::Unauthorized("Chave de API inválida".to_string()).into_response()
        }
        None => {
            tracing::warn!(path = %request.uri().path(), "Rejected request without API key");
            AppError::Unauthorized("Chave de API ausente".to_string()).into_response()
        }
    }
}

/// The key from `x-api-key`, falling back to an `Authorization: Bearer` token.
fn provided_key(request: &Request) -> Option<&str> {
    let headers = request.headers();

    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
