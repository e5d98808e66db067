use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::{
    error::Result,
    models::{LimitQuery, ProductResponse},
    services::recommendation_service::{self, PERSONALIZED_LIMIT, SIMILAR_LIMIT, TOP_RARITY_SIZE},
    utils::{extractors::ensure_self_or_admin, jwt::Claims},
    AppState,
};

pub async fn top_products(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Json<Vec<ProductResponse>> {
    let products =
        recommendation_service::top_by_rarity(state.products.as_ref(), params.resolve(TOP_RARITY_SIZE))
            .await;

    Json(products.into_iter().map(ProductResponse::from).collect())
}

pub async fn similar_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<LimitQuery>,
) -> Json<Vec<ProductResponse>> {
    let products = recommendation_service::similar_recommendations(
        state.products.as_ref(),
        id,
        params.resolve(SIMILAR_LIMIT),
    )
    .await;

    Json(products.into_iter().map(ProductResponse::from).collect())
}

pub async fn personalized_products(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    ensure_self_or_admin(&claims, user_id)?;

    let products = recommendation_service::personalized_recommendations(
        state.products.as_ref(),
        state.users.as_ref(),
        user_id,
        params.resolve(PERSONALIZED_LIMIT),
    )
    .await;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
