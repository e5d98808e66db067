use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database::{ProductStore, UserStore, check_health},
    error::Result,
    models::{NewProduct, NewUser, Product, User, UserQuery},
    queries::{PageWindow, ProductFilter, ProductOrder, products_queries, user_queries},
};

/// Both stores backed by one Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        products_queries::find_by_id(&self.pool, id).await
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        window: PageWindow,
    ) -> Result<(Vec<Product>, i64)> {
        products_queries::search_page(&self.pool, filter, order, window).await
    }

    async fn find_limited(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: i64,
    ) -> Result<Vec<Product>> {
        products_queries::find_limited(&self.pool, filter, order, limit).await
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        products_queries::find_all(&self.pool).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        products_queries::create_product(&self.pool, product).await
    }

    async fn ping(&self) -> Result<()> {
        check_health(&self.pool).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        user_queries::find_by_id(&self.pool, id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        user_queries::find_by_username(&self.pool, username).await
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        user_queries::find_by_nickname(&self.pool, nickname).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        user_queries::create_user(&self.pool, user).await
    }

    async fn search_users(&self, query: &UserQuery) -> Result<(Vec<User>, i64)> {
        user_queries::search_users(&self.pool, query).await
    }
}
