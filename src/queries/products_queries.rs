use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product},
    queries::{PageWindow, ProductFilter, ProductOrder},
};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn count_matching(pool: &PgPool, filter: &ProductFilter) -> Result<i64> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM products");
    filter.push_where(&mut query);

    let total = query.build_query_scalar::<i64>().fetch_one(pool).await?;

    Ok(total)
}

pub async fn search_page(
    pool: &PgPool,
    filter: &ProductFilter,
    order: ProductOrder,
    window: PageWindow,
) -> Result<(Vec<Product>, i64)> {
    let total = count_matching(pool, filter).await?;

    // Past the last page: skip the row query, keep the total.
    if window.offset() >= total {
        return Ok((Vec::new(), total));
    }

    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM products");
    filter.push_where(&mut query);

    query.push(" ORDER BY ");
    query.push(order.sql());

    query.push(" LIMIT ");
    query.push_bind(window.limit());
    query.push(" OFFSET ");
    query.push_bind(window.offset());

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok((products, total))
}

pub async fn find_limited(
    pool: &PgPool,
    filter: &ProductFilter,
    order: ProductOrder,
    limit: i64,
) -> Result<Vec<Product>> {
    if limit <= 0 {
        return Ok(Vec::new());
    }

    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM products");
    filter.push_where(&mut query);

    query.push(" ORDER BY ");
    query.push(order.sql());
    query.push(" LIMIT ");
    query.push_bind(limit);

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn create_product(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (
            name, description, detailed_description, price, stock, memory_type,
            original_owner, emotion_level, rarity_score, magical_power
         )
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING *",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.detailed_description)
    .bind(product.price)
    .bind(product.stock)
    .bind(product.memory_type)
    .bind(&product.original_owner)
    .bind(product.emotion_level)
    .bind(product.rarity_score)
    .bind(&product.magical_power)
    .fetch_one(pool)
    .await?;

    Ok(product)
}
