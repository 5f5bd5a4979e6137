//! Handlers for `/profiles` and `/profiles/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, ResourceId};
use crate::models::{Created, NewProfile, Profile};

/// `POST /profiles`. A zero `user_id` is rejected; any other value is stored
/// without checking that the user exists.
pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<NewProfile>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    if profile.user_id == 0 {
        return Err(ApiError::BadRequest);
    }
    let id = state.store.create_profile(profile).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// `GET /profiles/{id}`. Any integer is looked up, negative ones included.
pub async fn get_profile(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store
        .find_profile(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(profile))
}
