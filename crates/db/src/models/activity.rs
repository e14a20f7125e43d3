//! Activity entity model, DTOs and response views.

use camp_core::rules::MIN_NAME_LEN;
use camp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, FromRow)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub difficulty: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateActivity {
    #[validate(length(min = MIN_NAME_LEN))]
    pub name: String,
    pub difficulty: i32,
}

/// Activity without its signups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub id: DbId,
    pub name: String,
    pub difficulty: i32,
}

impl From<Activity> for ActivitySummary {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            difficulty: activity.difficulty,
        }
    }
}
