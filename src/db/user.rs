//! User accounts, keyed by their unique email.
//!
//! Profile fields live in one JSON column; partial updates are merged in SQL with
//! `json_patch`, and list appends use `json_insert`, so no update reads the row first.

use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::repository::{now_rfc3339, parse_json_or_default, Repository};
use crate::errors::AppError;
use crate::models::{CompletedContent, ContentNote, CreateUserRequest, UpdateUserRequest, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, profile, pending_update_password, \
                            completed_content, content_notes, created_at";

impl Repository {
    // ==================== USER OPERATIONS ====================

    /// Insert a new user with an already hashed password.
    ///
    /// A taken email is a `Conflict`.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            password_hash: password_hash.to_string(),
            profile: request.profile.clone(),
            pending_update_password: false,
            completed_content: Vec::new(),
            content_notes: Vec::new(),
            created_at: now_rfc3339(),
        };

        let result = sqlx::query(
            r#"INSERT INTO users (id, name, email, password_hash, profile, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(serde_json::to_string(&user.profile)?)
        .bind(&user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::info!(user_id = %user.id, "User created");
                Ok(user)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict("Usuário já cadastrado.".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Apply a partial update. `password_hash` replaces the stored hash when given.
    ///
    /// Returns `false` if no user has this email.
    pub async fn update_user(
        &self,
        email: &str,
        request: &UpdateUserRequest,
        password_hash: Option<&str>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE users SET
                name = COALESCE(?, name),
                password_hash = COALESCE(?, password_hash),
                pending_update_password = COALESCE(?, pending_update_password),
                profile = json_patch(profile, ?)
               WHERE email = ?"#,
        )
        .bind(&request.name)
        .bind(password_hash)
        .bind(request.pending_update_password.map(|b| b as i32))
        .bind(serde_json::to_string(&request.profile)?)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_user(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn add_content_note(&self, email: &str, note: &ContentNote) -> Result<bool, AppError> {
        self.append_json(email, "content_notes", serde_json::to_string(note)?)
            .await
    }

    pub async fn add_completed_content(
        &self,
        email: &str,
        completed: &CompletedContent,
    ) -> Result<bool, AppError> {
        self.append_json(email, "completed_content", serde_json::to_string(completed)?)
            .await
    }

    /// Append one JSON value to an array column. `column` is never user input.
    async fn append_json(&self, email: &str, column: &str, value: String) -> Result<bool, AppError> {
        let result = sqlx::query(&format!(
            "UPDATE users SET {column} = json_insert({column}, '$[#]', json(?)) WHERE email = ?"
        ))
        .bind(value)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> User {
    let profile: String = row.get("profile");
    let completed_content: String = row.get("completed_content");
    let content_notes: String = row.get("content_notes");
    let pending_update_password: i32 = row.get("pending_update_password");

    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        profile: parse_json_or_default(&profile),
        pending_update_password: pending_update_password != 0,
        completed_content: parse_json_or_default(&completed_content),
        content_notes: parse_json_or_default(&content_notes),
        created_at: row.get("created_at"),
    }
}
