//! Route definitions for the `/campers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::camper;
use crate::state::AppState;

/// Routes mounted at `/campers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camper::list).post(camper::create))
        .route("/{id}", get(camper::get_by_id).patch(camper::update))
}
