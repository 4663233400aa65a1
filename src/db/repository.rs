//! Database repository shared by all stores.
//!
//! Each collection adds its operations in its own `impl Repository` block.

use chrono::Utc;
use sqlx::SqlitePool;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pub(super) pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Current wall-clock time in epoch milliseconds.
pub(super) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current wall-clock time as an RFC 3339 string.
pub(super) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub(super) fn parse_json_or_default<T>(s: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match serde_json::from_str(s) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Unreadable JSON column, using default: {}", err);
            T::default()
        }
    }
}
