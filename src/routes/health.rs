use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::Result, AppState};

/// Liveness only; never touches the store.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the catalog store answers a round-trip.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>> {
    state.products.ping().await?;

    Ok(Json(json!({
        "status": "ready",
        "store": "connected",
    })))
}
