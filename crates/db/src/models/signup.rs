//! Signup join entity model, DTOs and response views.

use camp_core::rules::{MAX_SIGNUP_HOUR, MIN_SIGNUP_HOUR};
use camp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::activity::ActivitySummary;
use crate::models::camper::CamperSummary;

/// A signup row from the `signups` table.
#[derive(Debug, Clone, FromRow)]
pub struct Signup {
    pub id: DbId,
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub time: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new signup.
///
/// The referenced camper and activity are checked by the foreign keys at
/// insert time, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateSignup {
    pub camper_id: DbId,
    pub activity_id: DbId,
    #[validate(range(min = MIN_SIGNUP_HOUR, max = MAX_SIGNUP_HOUR))]
    pub time: i32,
}

/// A newly created signup with its camper and activity embedded one level
/// deep. Neither embedded record carries its own signups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupDetail {
    pub id: DbId,
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub time: i32,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

impl SignupDetail {
    pub fn new(signup: Signup, camper: CamperSummary, activity: ActivitySummary) -> Self {
        Self {
            id: signup.id,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            time: signup.time,
            camper,
            activity,
        }
    }
}

/// A signup as listed under its camper: the activity is embedded, the
/// camper is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperSignup {
    pub id: DbId,
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub time: i32,
    pub activity: ActivitySummary,
}

/// Flat row for a signup joined to its activity.
#[derive(Debug, Clone, FromRow)]
pub struct CamperSignupRow {
    pub id: DbId,
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub time: i32,
    pub activity_name: String,
    pub activity_difficulty: i32,
}

impl From<CamperSignupRow> for CamperSignup {
    fn from(row: CamperSignupRow) -> Self {
        Self {
            id: row.id,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
            time: row.time,
            activity: ActivitySummary {
                id: row.activity_id,
                name: row.activity_name,
                difficulty: row.activity_difficulty,
            },
        }
    }
}
