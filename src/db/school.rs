use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::repository::{now_rfc3339, Repository};
use crate::errors::AppError;
use crate::models::{Course, SchoolData, SchoolDataRequest};

impl Repository {
    // ==================== SCHOOL DATA OPERATIONS ====================

    pub async fn create_school_data(
        &self,
        request: &SchoolDataRequest,
    ) -> Result<SchoolData, AppError> {
        let record = SchoolData {
            id: Uuid::new_v4().to_string(),
            created_at: now_rfc3339(),
            course_list: request.course_list.clone(),
        };

        sqlx::query("INSERT INTO school_data (id, course_list, created_at) VALUES (?, ?, ?)")
            .bind(&record.id)
            .bind(encode_courses(&record.course_list)?)
            .bind(&record.created_at)
            .execute(&self.pool)
            .await?;

        tracing::info!(school_data_id = %record.id, "School data created");
        Ok(record)
    }

    pub async fn list_school_data(&self) -> Result<Vec<SchoolData>, AppError> {
        let rows =
            sqlx::query("SELECT id, course_list, created_at FROM school_data ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(school_data_from_row).collect()
    }

    pub async fn get_school_data(&self, id: &str) -> Result<Option<SchoolData>, AppError> {
        let row = sqlx::query("SELECT id, course_list, created_at FROM school_data WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(school_data_from_row).transpose()
    }

    /// Replace the course list when one is supplied. `false` if the record does not exist.
    pub async fn update_school_data(
        &self,
        id: &str,
        request: &SchoolDataRequest,
    ) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE school_data SET course_list = COALESCE(?, course_list) WHERE id = ?")
                .bind(encode_courses(&request.course_list)?)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_school_data(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM school_data WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn encode_courses(courses: &Option<Vec<Course>>) -> Result<Option<String>, AppError> {
    courses
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(AppError::from)
}

fn school_data_from_row(row: &SqliteRow) -> Result<SchoolData, AppError> {
    let course_list: Option<String> = row.get("course_list");
    Ok(SchoolData {
        id: row.get("id"),
        created_at: row.get("created_at"),
        course_list: course_list
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?,
    })
}
