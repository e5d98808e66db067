use crate::{
    database::ProductStore,
    error::{AppError, Result},
    models::{Product, ProductListResponse, ProductResponse, SearchRequest},
    queries::{Clause, ProductFilter, ProductOrder},
    services::search_composer,
};

pub const RELATED_LIMIT: i64 = 3;

pub async fn search(store: &dyn ProductStore, request: &SearchRequest) -> Result<ProductListResponse> {
    let (filter, order, window) = search_composer::compose(request);
    let (products, total_count) = store.find_page(&filter, order, window).await?;

    Ok(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
        total_count,
        current_page: window.page_number(),
        total_pages: window.total_pages(total_count),
    })
}

pub async fn product_detail(store: &dyn ProductStore, id: i64) -> Result<Product> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
}

/// Other products of the same category, rarest first. A missing product
/// (or one without a category) has no related products.
pub async fn related_products(
    store: &dyn ProductStore,
    id: i64,
    limit: i64,
) -> Result<Vec<Product>> {
    let Some(base) = store.find_by_id(id).await? else {
        return Ok(Vec::new());
    };

    let Some(memory_type) = base.memory_type else {
        return Ok(Vec::new());
    };

    let filter = ProductFilter::match_all()
        .and(Clause::CategoryEquals(memory_type))
        .and(Clause::IdNot(base.id));

    store
        .find_limited(&filter, ProductOrder::RarityDescending, limit)
        .await
}
