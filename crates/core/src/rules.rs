//! Field constraints for campers, activities and signups.
//!
//! The same bounds are declared on the request DTOs (via `validator`) and
//! as CHECK constraints in the schema, so a write that slips past one
//! layer is still rejected by the other.

/// Youngest age accepted for a camper, inclusive.
pub const MIN_CAMPER_AGE: i32 = 8;

/// Oldest age accepted for a camper, inclusive.
pub const MAX_CAMPER_AGE: i32 = 18;

/// First hour of the day a signup may be scheduled at.
pub const MIN_SIGNUP_HOUR: i32 = 0;

/// Last hour of the day a signup may be scheduled at.
pub const MAX_SIGNUP_HOUR: i32 = 23;

/// Minimum length of any entity name.
pub const MIN_NAME_LEN: u64 = 1;
