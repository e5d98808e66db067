use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::Result,
    models::{LimitQuery, ProductListResponse, ProductResponse, ProductSearchParams, SearchRequest},
    services::catalog_service,
    AppState,
};

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<ProductSearchParams>,
) -> Result<Json<ProductListResponse>> {
    let request = SearchRequest::try_from(params)?;
    let response = catalog_service::search(state.products.as_ref(), &request).await?;

    Ok(Json(response))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>> {
    let product = catalog_service::product_detail(state.products.as_ref(), id).await?;

    Ok(Json(product.into()))
}

pub async fn related_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let limit = params.resolve(catalog_service::RELATED_LIMIT);
    let products = catalog_service::related_products(state.products.as_ref(), id, limit).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
