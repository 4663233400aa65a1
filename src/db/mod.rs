//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data, and its transactions are
//! the only atomicity primitive the backend relies on.

mod counter;
mod forum;
mod notice;
mod repository;
mod school;
mod user;

pub use repository::*;

#[cfg(test)]
pub(crate) use repository::test_support;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS counters (
            name TEXT PRIMARY KEY,
            value INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS forums (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            tag TEXT NOT NULL,
            topics_count INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id INTEGER PRIMARY KEY,
            forum_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            content TEXT NOT NULL,
            replies_count INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS replies (
            id INTEGER PRIMARY KEY,
            topic_id INTEGER NOT NULL,
            forum_id INTEGER NOT NULL,
            author TEXT NOT NULL,
            text TEXT NOT NULL,
            accepted INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notices (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS school_data (
            id TEXT PRIMARY KEY,
            course_list TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            profile TEXT NOT NULL DEFAULT '{}',
            pending_update_password INTEGER NOT NULL DEFAULT 0,
            completed_content TEXT NOT NULL DEFAULT '[]',
            content_notes TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Secondary indexes used by the child lookups, cascades and the createdAt clamp
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_topics_forum_id ON topics(forum_id)",
        "CREATE INDEX IF NOT EXISTS idx_replies_topic_id ON replies(topic_id)",
        "CREATE INDEX IF NOT EXISTS idx_replies_forum_id ON replies(forum_id)",
        "CREATE INDEX IF NOT EXISTS idx_forums_created_at ON forums(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_topics_created_at ON topics(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_replies_created_at ON replies(created_at)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
