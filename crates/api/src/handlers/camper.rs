//! Handlers for the `/campers` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_db::models::camper::{CamperDetail, CamperSummary, CreateCamper, UpdateCamper};
use camp_db::repositories::CamperRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{entity_id, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Camper";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /campers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CamperSummary>>> {
    let campers = CamperRepo::list(&state.pool).await?;
    Ok(Json(campers.into_iter().map(CamperSummary::from).collect()))
}

/// GET /campers/{id}
///
/// Full detail, including every signup with its activity.
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<CamperDetail>> {
    let id = entity_id(path, ENTITY)?;
    let camper = CamperRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(camper))
}

/// PATCH /campers/{id}
///
/// A missing camper is reported before the body is looked at, so an
/// invalid body for an unknown id still yields 404.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<ValidJson<UpdateCamper>, AppError>,
) -> AppResult<(StatusCode, Json<CamperSummary>)> {
    let id = entity_id(path, ENTITY)?;
    CamperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let ValidJson(input) = body?;

    let camper = CamperRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(camper_id = camper.id, "Camper updated");

    Ok((StatusCode::ACCEPTED, Json(CamperSummary::from(camper))))
}

/// POST /campers
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCamper>,
) -> AppResult<(StatusCode, Json<CamperSummary>)> {
    let camper = CamperRepo::create(&state.pool, &input).await?;

    tracing::info!(camper_id = camper.id, age = camper.age, "Camper created");

    Ok((StatusCode::CREATED, Json(CamperSummary::from(camper))))
}
