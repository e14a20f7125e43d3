//! Repository for the `signups` join table.

use camp_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, ActivitySummary};
use crate::models::camper::{Camper, CamperSummary};
use crate::models::signup::{CamperSignup, CamperSignupRow, CreateSignup, Signup, SignupDetail};
use crate::repositories::{activity_repo, camper_repo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, camper_id, activity_id, \"time\", created_at, updated_at";

/// Provides create and lookup operations for signups.
pub struct SignupRepo;

impl SignupRepo {
    /// Insert a signup and load the camper and activity it links, in one
    /// transaction.
    ///
    /// A missing camper or activity surfaces as a foreign key violation
    /// (SQLSTATE `23503`) and nothing is written.
    pub async fn create_with_relations(
        pool: &PgPool,
        input: &CreateSignup,
    ) -> Result<SignupDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO signups (camper_id, activity_id, \"time\")
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let signup = sqlx::query_as::<_, Signup>(&insert_query)
            .bind(input.camper_id)
            .bind(input.activity_id)
            .bind(input.time)
            .fetch_one(&mut *tx)
            .await?;

        let camper_query = format!(
            "SELECT {} FROM campers WHERE id = $1",
            camper_repo::COLUMNS
        );
        let camper = sqlx::query_as::<_, Camper>(&camper_query)
            .bind(signup.camper_id)
            .fetch_one(&mut *tx)
            .await?;

        let activity_query = format!(
            "SELECT {} FROM activities WHERE id = $1",
            activity_repo::COLUMNS
        );
        let activity = sqlx::query_as::<_, Activity>(&activity_query)
            .bind(signup.activity_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(SignupDetail::new(
            signup,
            CamperSummary::from(camper),
            ActivitySummary::from(activity),
        ))
    }

    /// List a camper's signups with the activity of each embedded.
    pub async fn list_for_camper(
        pool: &PgPool,
        camper_id: DbId,
    ) -> Result<Vec<CamperSignup>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CamperSignupRow>(
            "SELECT s.id, s.camper_id, s.activity_id, s.\"time\",
                    a.name AS activity_name, a.difficulty AS activity_difficulty
             FROM signups s
             JOIN activities a ON a.id = s.activity_id
             WHERE s.camper_id = $1
             ORDER BY s.id",
        )
        .bind(camper_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(CamperSignup::from).collect())
    }
}
