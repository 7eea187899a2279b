//! Router assembly

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::handlers::{activity, auth, health};
use crate::middleware::require_session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let activity_routes = Router::new()
        .route("/create", post(activity::create))
        .route("/search", get(activity::search))
        .route("/{id}", get(activity::get))
        .route("/edit/{id}", post(activity::edit))
        .route("/delete/{id}", post(activity::delete))
        .route("/restore/{id}", post(activity::restore))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .nest("/api/activity", activity_routes)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
