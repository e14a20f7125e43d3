//! Camper entity model, DTOs and response views.

use camp_core::rules::{MAX_CAMPER_AGE, MIN_CAMPER_AGE, MIN_NAME_LEN};
use camp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::signup::CamperSignup;

/// A camper row from the `campers` table.
#[derive(Debug, Clone, FromRow)]
pub struct Camper {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new camper. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCamper {
    #[validate(length(min = MIN_NAME_LEN))]
    pub name: String,
    #[validate(range(min = MIN_CAMPER_AGE, max = MAX_CAMPER_AGE))]
    pub age: i32,
}

/// DTO for a partial camper update.
///
/// Only the fields listed here may be changed; anything else in the body
/// is rejected during deserialization. `null` is treated as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCamper {
    #[validate(length(min = MIN_NAME_LEN))]
    pub name: Option<String>,
    #[validate(range(min = MIN_CAMPER_AGE, max = MAX_CAMPER_AGE))]
    pub age: Option<i32>,
}

/// Camper without its signups. Used by list, create and update responses
/// and wherever a camper is embedded in another record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperSummary {
    pub id: DbId,
    pub name: String,
    pub age: i32,
}

impl From<Camper> for CamperSummary {
    fn from(camper: Camper) -> Self {
        Self {
            id: camper.id,
            name: camper.name,
            age: camper.age,
        }
    }
}

/// Camper with its signups, each carrying the activity it points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperDetail {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub signups: Vec<CamperSignup>,
}

impl CamperDetail {
    pub fn new(camper: Camper, signups: Vec<CamperSignup>) -> Self {
        Self {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(body: serde_json::Value) -> Result<CreateCamper, serde_json::Error> {
        serde_json::from_value(body)
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in [MIN_CAMPER_AGE, MAX_CAMPER_AGE] {
            let input = create(serde_json::json!({"name": "Ana", "age": age})).unwrap();
            assert!(input.validate().is_ok(), "age {age} should be accepted");
        }
    }

    #[test]
    fn rejects_age_outside_bounds() {
        for age in [MIN_CAMPER_AGE - 1, MAX_CAMPER_AGE + 1] {
            let input = create(serde_json::json!({"name": "Ana", "age": age})).unwrap();
            assert!(input.validate().is_err(), "age {age} should be rejected");
        }
    }

    #[test]
    fn rejects_empty_name() {
        let input = create(serde_json::json!({"name": "", "age": 10})).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(create(serde_json::json!({"name": "Ana", "age": 10, "id": 3})).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(create(serde_json::json!({"name": "Ana"})).is_err());
    }

    #[test]
    fn update_skips_absent_fields() {
        let input: UpdateCamper = serde_json::from_value(serde_json::json!({"name": "Bo"})).unwrap();
        assert_eq!(input.name.as_deref(), Some("Bo"));
        assert!(input.age.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_validates_supplied_age() {
        let input: UpdateCamper = serde_json::from_value(serde_json::json!({"age": 19})).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let result: Result<UpdateCamper, _> =
            serde_json::from_value(serde_json::json!({"nickname": "B"}));
        assert!(result.is_err());
    }
}
