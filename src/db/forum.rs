//! Forum → topic → reply storage.
//!
//! Every mutation runs in one transaction whose first statement is a write, so the
//! connection takes the write lock up front and waits on the busy timeout instead of
//! failing on a stale read snapshot. Parent counters are maintained with in-place
//! arithmetic, never read back into Rust and rewritten.

use sqlx::{sqlite::SqliteRow, Row};

use super::counter::{self, counters};
use super::repository::{now_millis, Repository};
use crate::errors::AppError;
use crate::models::{
    CreateForumRequest, CreateReplyRequest, CreateTopicRequest, Forum, Reply, Topic,
    UpdateForumRequest, UpdateReplyRequest, UpdateTopicRequest,
};

const FORUM_COLUMNS: &str = "id, name, description, tag, topics_count, created_at";
const TOPIC_COLUMNS: &str = "id, forum_id, title, author, content, replies_count, created_at";
const REPLY_COLUMNS: &str = "id, topic_id, forum_id, author, text, accepted, created_at";

impl Repository {
    // ==================== FORUM OPERATIONS ====================

    /// Create a forum with a fresh id, zero topics and a server timestamp.
    ///
    /// `createdAt` never goes below the newest stored forum, so creation order and
    /// timestamp order agree even if the wall clock steps back.
    pub async fn create_forum(&self, request: &CreateForumRequest) -> Result<Forum, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = counter::next_id(&mut *tx, counters::FORUMS).await?;

        sqlx::query(
            r#"INSERT INTO forums (id, name, description, tag, topics_count, created_at)
               VALUES (?, ?, ?, ?, 0, MAX(?, COALESCE((SELECT MAX(created_at) FROM forums), 0)))"#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.tag)
        .bind(now_millis())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(forum_id = id, "Forum created");

        self.get_forum_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Forum {} missing after insert", id)))
    }

    /// List all forums in insertion order.
    pub async fn list_forums(&self) -> Result<Vec<Forum>, AppError> {
        let rows = sqlx::query(&format!("SELECT {FORUM_COLUMNS} FROM forums ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(forum_from_row).collect())
    }

    /// Get a forum by ID.
    pub async fn get_forum_by_id(&self, id: i64) -> Result<Option<Forum>, AppError> {
        let row = sqlx::query(&format!("SELECT {FORUM_COLUMNS} FROM forums WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(forum_from_row))
    }

    /// Overwrite only the supplied fields. `None` if the forum does not exist.
    pub async fn update_forum(
        &self,
        id: i64,
        request: &UpdateForumRequest,
    ) -> Result<Option<Forum>, AppError> {
        let result = sqlx::query(
            r#"UPDATE forums SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                tag = COALESCE(?, tag)
               WHERE id = ?"#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.tag)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_forum_by_id(id).await
    }

    /// Delete a forum together with all of its topics and their replies.
    ///
    /// Returns `false` if the forum does not exist.
    pub async fn delete_forum_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let forum = sqlx::query("DELETE FROM forums WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if forum.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let replies = sqlx::query(
            r#"DELETE FROM replies
               WHERE forum_id = ?
                  OR topic_id IN (SELECT id FROM topics WHERE forum_id = ?)"#,
        )
        .bind(id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let topics = sqlx::query("DELETE FROM topics WHERE forum_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            forum_id = id,
            topics = topics.rows_affected(),
            replies = replies.rows_affected(),
            "Forum deleted with descendants"
        );

        Ok(true)
    }

    // ==================== TOPIC OPERATIONS ====================

    /// Create a topic under `forum_id`, bumping the forum's `topicsCount`.
    ///
    /// `None` if the forum does not exist.
    pub async fn create_topic(
        &self,
        forum_id: i64,
        request: &CreateTopicRequest,
    ) -> Result<Option<Topic>, AppError> {
        let mut tx = self.pool.begin().await?;

        let parent = sqlx::query("UPDATE forums SET topics_count = topics_count + 1 WHERE id = ?")
            .bind(forum_id)
            .execute(&mut *tx)
            .await?;

        if parent.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let id = counter::next_id(&mut *tx, counters::TOPICS).await?;

        sqlx::query(
            r#"INSERT INTO topics (id, forum_id, title, author, content, replies_count, created_at)
               VALUES (?, ?, ?, ?, ?, 0, MAX(?, COALESCE((SELECT MAX(created_at) FROM topics), 0)))"#,
        )
        .bind(id)
        .bind(forum_id)
        .bind(&request.title)
        .bind(&request.author)
        .bind(&request.content)
        .bind(now_millis())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(forum_id, topic_id = id, "Topic created");

        self.get_topic_by_id(forum_id, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Topic {} missing after insert", id)))
            .map(Some)
    }

    /// List the topics of a forum in insertion order. `None` if the forum does not exist.
    pub async fn list_topics(&self, forum_id: i64) -> Result<Option<Vec<Topic>>, AppError> {
        if self.get_forum_by_id(forum_id).await?.is_none() {
            return Ok(None);
        }

        let rows = sqlx::query(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE forum_id = ? ORDER BY id"
        ))
        .bind(forum_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(rows.iter().map(topic_from_row).collect()))
    }

    /// Get a topic by ID. A topic that belongs to another forum counts as absent.
    pub async fn get_topic_by_id(
        &self,
        forum_id: i64,
        topic_id: i64,
    ) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ? AND forum_id = ?"
        ))
        .bind(topic_id)
        .bind(forum_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(topic_from_row))
    }

    pub async fn update_topic(
        &self,
        forum_id: i64,
        topic_id: i64,
        request: &UpdateTopicRequest,
    ) -> Result<Option<Topic>, AppError> {
        let result = sqlx::query(
            r#"UPDATE topics SET
                title = COALESCE(?, title),
                author = COALESCE(?, author),
                content = COALESCE(?, content)
               WHERE id = ? AND forum_id = ?"#,
        )
        .bind(&request.title)
        .bind(&request.author)
        .bind(&request.content)
        .bind(topic_id)
        .bind(forum_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_topic_by_id(forum_id, topic_id).await
    }

    /// Delete a topic and its replies, decrementing the forum's `topicsCount` (floor 0).
    pub async fn delete_topic(&self, forum_id: i64, topic_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = sqlx::query("DELETE FROM topics WHERE id = ? AND forum_id = ?")
            .bind(topic_id)
            .bind(forum_id)
            .execute(&mut *tx)
            .await?;

        if topic.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let replies = sqlx::query("DELETE FROM replies WHERE topic_id = ?")
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE forums SET topics_count = MAX(topics_count - 1, 0) WHERE id = ?")
            .bind(forum_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            forum_id,
            topic_id,
            replies = replies.rows_affected(),
            "Topic deleted"
        );

        Ok(true)
    }

    // ==================== REPLY OPERATIONS ====================

    /// Create a reply, bumping the topic's `repliesCount`.
    ///
    /// `None` unless the topic exists inside `forum_id`.
    pub async fn create_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        request: &CreateReplyRequest,
    ) -> Result<Option<Reply>, AppError> {
        let mut tx = self.pool.begin().await?;

        let parent = sqlx::query(
            "UPDATE topics SET replies_count = replies_count + 1 WHERE id = ? AND forum_id = ?",
        )
        .bind(topic_id)
        .bind(forum_id)
        .execute(&mut *tx)
        .await?;

        if parent.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let id = counter::next_id(&mut *tx, counters::REPLIES).await?;

        sqlx::query(
            r#"INSERT INTO replies (id, topic_id, forum_id, author, text, accepted, created_at)
               VALUES (?, ?, ?, ?, ?, ?, MAX(?, COALESCE((SELECT MAX(created_at) FROM replies), 0)))"#,
        )
        .bind(id)
        .bind(topic_id)
        .bind(forum_id)
        .bind(&request.author)
        .bind(&request.text)
        .bind(request.accepted as i32)
        .bind(now_millis())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(forum_id, topic_id, reply_id = id, "Reply created");

        self.get_reply_by_id(forum_id, topic_id, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Reply {} missing after insert", id)))
            .map(Some)
    }

    /// List the replies of a topic in insertion order.
    ///
    /// `None` unless the topic exists inside `forum_id`.
    pub async fn list_replies(
        &self,
        forum_id: i64,
        topic_id: i64,
    ) -> Result<Option<Vec<Reply>>, AppError> {
        if self.get_topic_by_id(forum_id, topic_id).await?.is_none() {
            return Ok(None);
        }

        let rows = sqlx::query(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE topic_id = ? AND forum_id = ? ORDER BY id"
        ))
        .bind(topic_id)
        .bind(forum_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(rows.iter().map(reply_from_row).collect()))
    }

    pub async fn get_reply_by_id(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
    ) -> Result<Option<Reply>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE id = ? AND topic_id = ? AND forum_id = ?"
        ))
        .bind(reply_id)
        .bind(topic_id)
        .bind(forum_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(reply_from_row))
    }

    pub async fn update_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
        request: &UpdateReplyRequest,
    ) -> Result<Option<Reply>, AppError> {
        let result = sqlx::query(
            r#"UPDATE replies SET
                author = COALESCE(?, author),
                text = COALESCE(?, text),
                accepted = COALESCE(?, accepted)
               WHERE id = ? AND topic_id = ? AND forum_id = ?"#,
        )
        .bind(&request.author)
        .bind(&request.text)
        .bind(request.accepted.map(|b| b as i32))
        .bind(reply_id)
        .bind(topic_id)
        .bind(forum_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_reply_by_id(forum_id, topic_id, reply_id).await
    }

    /// Delete a reply, decrementing the topic's `repliesCount` (floor 0).
    pub async fn delete_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
    ) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let reply =
            sqlx::query("DELETE FROM replies WHERE id = ? AND topic_id = ? AND forum_id = ?")
                .bind(reply_id)
                .bind(topic_id)
                .bind(forum_id)
                .execute(&mut *tx)
                .await?;

        if reply.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("UPDATE topics SET replies_count = MAX(replies_count - 1, 0) WHERE id = ?")
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}

// Helper functions for row conversion

fn forum_from_row(row: &SqliteRow) -> Forum {
    Forum {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        tag: row.get("tag"),
        topics_count: row.get("topics_count"),
        created_at: row.get("created_at"),
    }
}

fn topic_from_row(row: &SqliteRow) -> Topic {
    Topic {
        id: row.get("id"),
        forum_id: row.get("forum_id"),
        title: row.get("title"),
        author: row.get("author"),
        content: row.get("content"),
        replies_count: row.get("replies_count"),
        created_at: row.get("created_at"),
    }
}

fn reply_from_row(row: &SqliteRow) -> Reply {
    let accepted: i32 = row.get("accepted");
    Reply {
        id: row.get("id"),
        topic_id: row.get("topic_id"),
        forum_id: row.get("forum_id"),
        author: row.get("author"),
        text: row.get("text"),
        accepted: accepted != 0,
        created_at: row.get("created_at"),
    }
}
