//! Handlers for the `/activities` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_db::models::activity::{ActivitySummary, CreateActivity};
use camp_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{entity_id, ValidJson};
use crate::state::AppState;

/// GET /activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ActivitySummary>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(
        activities.into_iter().map(ActivitySummary::from).collect(),
    ))
}

/// POST /activities
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<ActivitySummary>)> {
    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(activity_id = activity.id, "Activity created");

    Ok((StatusCode::CREATED, Json(ActivitySummary::from(activity))))
}

/// DELETE /activities/{id}
///
/// Removes the activity and all of its signups. Any store error is
/// reported as 400 with the underlying message.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = entity_id(path, "Activity")?;
    let removed = ActivityRepo::delete_with_signups(&state.pool, id)
        .await
        .map_err(|e| AppError::DeleteFailed(e.to_string()))?;

    match removed {
        Some(signups_removed) => {
            tracing::info!(activity_id = id, signups_removed, "Activity deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        })),
    }
}
