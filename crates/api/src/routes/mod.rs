pub mod activities;
pub mod campers;
pub mod health;
pub mod signups;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campers                     list, create
/// /campers/{id}                get (with signups), patch
///
/// /activities                  list, create
/// /activities/{id}             delete (cascades to signups)
///
/// /signups                     create (embeds camper and activity)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campers", campers::router())
        .nest("/activities", activities::router())
        .nest("/signups", signups::router())
}
