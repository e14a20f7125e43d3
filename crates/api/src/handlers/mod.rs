//! Request handlers, one module per resource.

pub mod activity;
pub mod camper;
pub mod signup;
