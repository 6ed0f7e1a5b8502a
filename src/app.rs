use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, series, uploads};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/series", series::router())
        .nest("/api/uploads", uploads::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
