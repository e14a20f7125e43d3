//! Handlers for the `/signups` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camp_db::models::signup::{CreateSignup, SignupDetail};
use camp_db::repositories::SignupRepo;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::state::AppState;

/// POST /signups
///
/// An unknown `camper_id` or `activity_id` trips the foreign key and is
/// reported as a validation failure.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSignup>,
) -> AppResult<(StatusCode, Json<SignupDetail>)> {
    let signup = SignupRepo::create_with_relations(&state.pool, &input).await?;

    tracing::info!(
        signup_id = signup.id,
        camper_id = signup.camper_id,
        activity_id = signup.activity_id,
        time = signup.time,
        "Signup created"
    );

    Ok((StatusCode::CREATED, Json(signup)))
}
