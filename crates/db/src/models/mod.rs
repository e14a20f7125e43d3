//! Domain model structs, DTOs and response views.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for inserts (and patches, where exposed)
//! - `Serialize` view structs, one per response shape

pub mod activity;
pub mod camper;
pub mod signup;
