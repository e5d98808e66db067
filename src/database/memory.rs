use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    database::{ProductStore, UserStore},
    error::{AppError, Result},
    models::{NewProduct, NewUser, Product, User, UserQuery},
    queries::{PageWindow, ProductFilter, ProductOrder},
};

/// In-process store for the `memory` backend and for tests. Evaluates the
/// same filters and orderings the Postgres store renders to SQL.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        Self {
            products: RwLock::new(products),
            users: RwLock::new(Vec::new()),
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn select(&self, filter: &ProductFilter, order: ProductOrder) -> Vec<Product> {
        let products = self.products.read().await;
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| order.compare(a, b));
        matching
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        window: PageWindow,
    ) -> Result<(Vec<Product>, i64)> {
        let matching = self.select(filter, order).await;
        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(window.offset()).unwrap_or(usize::MAX))
            .take(window.size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_limited(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: i64,
    ) -> Result<Vec<Product>> {
        let mut matching = self.select(filter, order).await;
        matching.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(matching)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        let mut products = self.products.write().await;
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let created = Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            detailed_description: product.detailed_description.clone(),
            price: product.price,
            stock: product.stock,
            memory_type: product.memory_type,
            original_owner: product.original_owner.clone(),
            emotion_level: product.emotion_level,
            rarity_score: product.rarity_score,
            magical_power: product.magical_power.clone(),
            created_at: Utc::now(),
        };
        products.push(created.clone());

        Ok(created)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.nickname == nickname).cloned())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let mut users = self.users.write().await;

        // Checked under the write lock, mirroring the unique constraints.
        if users
            .iter()
            .any(|u| u.username == user.username || u.nickname == user.nickname)
        {
            return Err(AppError::Conflict(
                "Username or nickname is already taken".to_string(),
            ));
        }

        let created = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            character_type: user.character_type,
            created_at: Utc::now(),
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn search_users(&self, query: &UserQuery) -> Result<(Vec<User>, i64)> {
        let users = self.users.read().await;
        let term = query.username_term().map(str::to_lowercase);

        let mut matching: Vec<User> = users
            .iter()
            .filter(|u| {
                term.as_deref()
                    .map_or(true, |t| u.username.to_lowercase().contains(t))
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();

        Ok((page, total))
    }
}
