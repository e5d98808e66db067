use axum::{extract::State, Json};

use crate::{
    error::Result,
    models::{AuthResponse, LoginRequest},
    services::user_service,
    AppState,
};

pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let response = user_service::login(state.users.as_ref(), &state.jwt, payload).await?;

    Ok(Json(response))
}
