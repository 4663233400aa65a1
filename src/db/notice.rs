use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::repository::{now_rfc3339, Repository};
use crate::errors::AppError;
use crate::models::{CreateNoticeRequest, Notice, UpdateNoticeRequest};

impl Repository {
    // ==================== NOTICE OPERATIONS ====================

    pub async fn create_notice(&self, request: &CreateNoticeRequest) -> Result<Notice, AppError> {
        let notice = Notice {
            id: Uuid::new_v4().to_string(),
            title: request.title.clone(),
            content: request.content.clone(),
            created_at: now_rfc3339(),
        };

        sqlx::query("INSERT INTO notices (id, title, content, created_at) VALUES (?, ?, ?, ?)")
            .bind(&notice.id)
            .bind(&notice.title)
            .bind(&notice.content)
            .bind(&notice.created_at)
            .execute(&self.pool)
            .await?;

        tracing::info!(notice_id = %notice.id, "Notice created");
        Ok(notice)
    }

    pub async fn list_notices(&self) -> Result<Vec<Notice>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, content, created_at FROM notices ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(notice_from_row).collect())
    }

    pub async fn get_notice(&self, id: &str) -> Result<Option<Notice>, AppError> {
        let row = sqlx::query("SELECT id, title, content, created_at FROM notices WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(notice_from_row))
    }

    /// Returns `false` if the notice does not exist.
    pub async fn update_notice(
        &self,
        id: &str,
        request: &UpdateNoticeRequest,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE notices SET
                title = COALESCE(?, title),
                content = COALESCE(?, content)
               WHERE id = ?"#,
        )
        .bind(&request.title)
        .bind(&request.content)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_notice(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn notice_from_row(row: &SqliteRow) -> Notice {
    Notice {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}
