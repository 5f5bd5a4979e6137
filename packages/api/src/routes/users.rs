//! Handlers for `/users` and `/users/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, ResourceId};
use crate::models::{Created, NewUser, User, UserUpdate};

/// `POST /users`. Email and name are stored as given, empty or not.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let id = state.store.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// `GET /users/{id}`.
pub async fn get_user(
    State(state): State<AppState>,
    id: ResourceId,
) -> Result<Json<User>, ApiError> {
    let id = id.non_negative()?;
    let user = state.store.find_user(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// `PUT /users/{id}`. Renames the user; the name must not be empty.
pub async fn update_user(
    State(state): State<AppState>,
    id: ResourceId,
    JsonBody(update): JsonBody<UserUpdate>,
) -> Result<StatusCode, ApiError> {
    let id = id.non_negative()?;
    if update.name.is_empty() {
        return Err(ApiError::BadRequest);
    }
    if state.store.rename_user(id, &update.name).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /users/{id}`. Profiles of the user are kept.
pub async fn delete_user(
    State(state): State<AppState>,
    id: ResourceId,
) -> Result<StatusCode, ApiError> {
    let id = id.non_negative()?;
    if state.store.delete_user(id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
