use async_trait::async_trait;

use crate::{
    error::Result,
    models::{NewProduct, NewUser, Product, User, UserQuery},
    queries::{PageWindow, ProductFilter, ProductOrder},
};

/// Catalog persistence consumed by the services.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// One page of matching products plus the total number of matches.
    async fn find_page(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        window: PageWindow,
    ) -> Result<(Vec<Product>, i64)>;

    async fn find_limited(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: i64,
    ) -> Result<Vec<Product>>;

    /// The whole catalog in catalog order.
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn create_product(&self, product: &NewProduct) -> Result<Product>;

    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>>;

    /// Fails with `Conflict` when the username or nickname is already taken.
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    async fn search_users(&self, query: &UserQuery) -> Result<(Vec<User>, i64)>;
}
