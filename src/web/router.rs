use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::AppState;
use super::handlers::{forms, generate, health, reminders};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/api/health", get(health::health_endpoint))
        .route("/api/generate", post(generate::generate_endpoint))
        .route("/api/forms/create", post(forms::create_form_endpoint))
        .route(
            "/api/reminders/preview",
            post(reminders::preview_endpoint),
        )
        .route("/api/reminders/create", post(reminders::create_endpoint))
        .layer(cors)
        .with_state(state)
}
