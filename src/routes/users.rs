use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, Result},
    models::UserResponse,
    utils::{extractors::extract_user_id, jwt::Claims},
    AppState,
};

pub async fn current_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>> {
    let user_id = extract_user_id(&claims)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
