//! Named monotonic id sequences.

use sqlx::{Executor, Sqlite};

use crate::errors::AppError;

/// Sequence names, one per entity kind.
pub mod counters {
    pub const FORUMS: &str = "forums";
    pub const TOPICS: &str = "topics";
    pub const REPLIES: &str = "replies";
}

/// Advance the named sequence and return its new value.
///
/// A single upsert statement: an absent counter starts at 0, so the first id is 1.
/// Pass a transaction to commit the allocation together with the insert that uses it.
pub(crate) async fn next_id<'e, E>(executor: E, name: &str) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let value: i64 = sqlx::query_scalar(
        r#"INSERT INTO counters (name, value) VALUES (?, 1)
           ON CONFLICT(name) DO UPDATE SET value = value + 1
           RETURNING value"#,
    )
    .bind(name)
    .fetch_one(executor)
    .await?;

    Ok(value)
}
