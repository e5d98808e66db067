use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::Result,
    models::{CreateProductRequest, ProductResponse, UserQuery, UserResponse, UserSearchResponse},
    AppState,
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let new_product = payload.validate()?;
    let product = state.products.create_product(&new_product).await?;

    tracing::info!("Created product {} ({})", product.name, product.id);

    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<UserSearchResponse>> {
    let (users, total) = state.users.search_users(&params).await?;

    Ok(Json(UserSearchResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
        limit: params.limit(),
        offset: params.offset(),
    }))
}
