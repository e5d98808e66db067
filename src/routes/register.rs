use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::Result,
    models::{AuthResponse, RegisterRequest},
    services::user_service,
    AppState,
};

pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let response =
        user_service::register(state.users.as_ref(), &state.jwt, state.bcrypt_cost, payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
