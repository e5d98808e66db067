mod admin;
mod health;
mod login;
mod products;
mod recommendations;
mod register;
mod users;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::{
    middleware::{admin_middleware, auth_middleware},
    AppState,
};

pub fn create_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products", get(products::search_products))
        .route("/api/products/:id", get(products::get_product))
        .route("/api/products/:id/related", get(products::related_products))
        .route(
            "/api/recommendations/products",
            get(recommendations::top_products),
        )
        .route(
            "/api/recommendations/products/:id/similar",
            get(recommendations::similar_products),
        )
        .route("/api/auth/register", post(register::register_user))
        .route("/api/auth/login", post(login::login_user));

    let authenticated = Router::new()
        .route(
            "/api/recommendations/users/:id/personalized",
            get(recommendations::personalized_products),
        )
        .route("/api/users/me", get(users::current_user))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let admin = Router::new()
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/products", post(admin::create_product))
        .route_layer(from_fn_with_state(state, admin_middleware));

    public.merge(authenticated).merge(admin)
}
