//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod camper_repo;
pub mod signup_repo;

pub use activity_repo::ActivityRepo;
pub use camper_repo::CamperRepo;
pub use signup_repo::SignupRepo;
