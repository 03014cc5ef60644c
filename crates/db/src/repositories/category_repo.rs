//! Repository for the `category` table.

use msgapi_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for category queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    ///
    /// A duplicate name fails with the `uq_category_name` constraint.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO category (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Rename a category, returning the updated row. `None` keeps the
    /// current name.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE category SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Its messages are removed by the
    /// `ON DELETE CASCADE` foreign key. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the category called `name`, inserting it first if needed.
    ///
    /// Runs inside the caller's transaction so the category and the message
    /// referencing it are committed together.
    pub(crate) async fn find_or_create_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let insert = format!(
            "INSERT INTO category (name) VALUES ($1)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Category>(&insert)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

        if let Some(category) = created {
            tracing::debug!(category_id = category.id, name, "Category created implicitly");
            return Ok(category);
        }

        let select = format!("SELECT {COLUMNS} FROM category WHERE name = $1");
        sqlx::query_as::<_, Category>(&select)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}
