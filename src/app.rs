use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    config::{AppConfig, AuthConfig, StoreBackend},
    database::{self, MemoryStore, PgStore, ProductStore, UserStore},
    error::{AppError, Result},
    routes,
    utils::jwt::JwtKeys,
};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub users: Arc<dyn UserStore>,
    pub jwt: Arc<JwtKeys>,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
        auth: &AuthConfig,
    ) -> Self {
        Self {
            products,
            users,
            jwt: Arc::new(JwtKeys::new(&auth.jwt_secret, auth.token_ttl_days)),
            bcrypt_cost: auth.bcrypt_cost,
        }
    }

    /// Both stores backed by one in-process `MemoryStore`.
    pub fn in_memory(store: MemoryStore, auth: &AuthConfig) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store, auth)
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let state = match config.database.backend {
        StoreBackend::Postgres => {
            let pool = database::create_pool(&config.database).await?;
            let store = Arc::new(PgStore::new(pool));
            AppState::new(store.clone(), store, &config.auth)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            AppState::in_memory(MemoryStore::new(), &config.auth)
        }
    };

    if config.catalog.seed_sample_data {
        database::seed_if_empty(state.products.as_ref()).await?;
    }

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins);

    Ok(router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors))
}

/// The API routes over an already-built state, without transport layers.
pub fn router(state: AppState) -> Router {
    routes::create_router(state.clone()).with_state(state)
}
