//! Route definitions for the Toko HTTP API.
//!
//! Routes are grouped by principal class. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(admin_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Customer auth endpoints: register, login, profile, logout.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/register", post(handlers::user::register))
        .route("/user/login", post(handlers::user::login))
        .route("/user/profile", get(handlers::user::profile))
        .route("/user/logout", post(handlers::user::logout))
}

/// Administrator auth endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/register", post(handlers::admin::register))
        .route("/admin/login", post(handlers::admin::login))
        .route("/admin/profile", get(handlers::admin::profile))
        .route("/admin/logout", post(handlers::admin::logout))
}
