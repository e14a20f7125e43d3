//! Request extractors that keep every rejection inside the JSON error contract.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, Path, Request};
use axum::Json;
use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Like [`Json`], but a body that fails to parse, has unknown or missing
/// fields, or breaks a `#[validate]` rule is rejected as
/// [`CoreError::Validation`] (400) instead of axum's plain-text 4xx.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        validate_input(&value)?;
        Ok(Self(value))
    }
}

/// Unwrap an `{id}` path segment for `entity`.
///
/// Handlers extract `Result<Path<DbId>, PathRejection>` and pass it here, so
/// `/campers/abc` or an id past `i64::MAX` becomes a 404 naming the entity
/// instead of axum's plain-text 400.
pub fn entity_id(
    path: Result<Path<DbId>, PathRejection>,
    entity: &'static str,
) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::UnparseableId {
            entity,
            raw: rejection.body_text(),
        })
}
