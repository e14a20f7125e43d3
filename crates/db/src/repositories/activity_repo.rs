//! Repository for the `activities` table.

use camp_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, difficulty, created_at, updated_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (name, difficulty)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// List all activities in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// Delete an activity and every signup pointing at it, in one transaction.
    ///
    /// Returns the number of signups removed, or `None` if the activity does
    /// not exist (nothing is changed in that case).
    pub async fn delete_with_signups(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let signups = sqlx::query("DELETE FROM signups WHERE activity_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let activity = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if activity.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(signups.rows_affected()))
    }
}
