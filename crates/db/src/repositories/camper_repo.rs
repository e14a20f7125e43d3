//! Repository for the `campers` table.

use camp_core::types::DbId;
use sqlx::PgPool;

use crate::models::camper::{Camper, CamperDetail, CreateCamper, UpdateCamper};
use crate::repositories::SignupRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, age, created_at, updated_at";

/// Provides CRUD operations for campers.
pub struct CamperRepo;

impl CamperRepo {
    /// Insert a new camper, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCamper) -> Result<Camper, sqlx::Error> {
        let query = format!(
            "INSERT INTO campers (name, age)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(&input.name)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find a camper by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers WHERE id = $1");
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a camper together with its signups and their activities.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<CamperDetail>, sqlx::Error> {
        let Some(camper) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let signups = SignupRepo::list_for_camper(pool, camper.id).await?;
        Ok(Some(CamperDetail::new(camper, signups)))
    }

    /// List all campers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers ORDER BY id");
        sqlx::query_as::<_, Camper>(&query).fetch_all(pool).await
    }

    /// Update a camper. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCamper,
    ) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!(
            "UPDATE campers SET
                name = COALESCE($2, name),
                age = COALESCE($3, age)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }
}
