//! Repository for the `message` table.

use msgapi_core::message::{MessagePatch, NewMessage};
use msgapi_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{Message, MessageWithCategory};
use crate::repositories::CategoryRepo;

/// Column list for plain `message` queries.
const COLUMNS: &str = "id, message, duration, creation_date, category_id, printed_times, printed_once";

/// Column list for `message m JOIN category c` queries.
const JOINED_COLUMNS: &str = "m.id, m.message, m.duration, m.creation_date, m.category_id, \
    c.name AS category_name, m.printed_times, m.printed_once";

/// Provides CRUD operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// List all messages with their category, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<MessageWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM message m
             JOIN category c ON c.id = m.category_id
             ORDER BY m.id ASC"
        );
        sqlx::query_as::<_, MessageWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the messages of one category, ordered by text.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM message WHERE category_id = $1 ORDER BY message ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List every message ordered by category, then text. Used to render
    /// all categories with their messages in one query.
    pub async fn list_grouped_by_category(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM message ORDER BY category_id ASC, message ASC");
        sqlx::query_as::<_, Message>(&query).fetch_all(pool).await
    }

    /// Find a message with its category by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MessageWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM message m
             JOIN category c ON c.id = m.category_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, MessageWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new message, returning the created row with its category.
    ///
    /// The category is looked up by name and inserted if it does not exist
    /// yet; both happen in one transaction. A duplicate message text fails
    /// with the `uq_message_message` constraint and nothing is committed.
    pub async fn create(
        pool: &PgPool,
        input: &NewMessage,
    ) -> Result<MessageWithCategory, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let category = CategoryRepo::find_or_create_inner(&mut tx, &input.category).await?;

        let query = format!(
            "INSERT INTO message (message, duration, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let message = sqlx::query_as::<_, Message>(&query)
            .bind(&input.message)
            .bind(input.duration)
            .bind(category.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(MessageWithCategory {
            id: message.id,
            message: message.message,
            duration: message.duration,
            creation_date: message.creation_date,
            category_id: category.id,
            category_name: category.name,
            printed_times: message.printed_times,
            printed_once: message.printed_once,
        })
    }

    /// Apply a partial update, returning the updated row with its category.
    /// Fields absent from `patch` keep their current values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &MessagePatch,
    ) -> Result<Option<MessageWithCategory>, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                UPDATE message SET
                    message = COALESCE($2, message),
                    duration = COALESCE($3, duration),
                    printed_times = COALESCE($4, printed_times),
                    printed_once = COALESCE($5, printed_once)
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS}
             FROM m
             JOIN category c ON c.id = m.category_id"
        );
        sqlx::query_as::<_, MessageWithCategory>(&query)
            .bind(id)
            .bind(&patch.message)
            .bind(patch.duration)
            .bind(patch.printed_times)
            .bind(patch.printed_once)
            .fetch_optional(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM message WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
