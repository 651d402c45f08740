use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use ayushman_cell::router::ayushman_routes;
use directory_cell::router::directory_routes;
use directory_cell::CareRegistry;
use emergency_cell::router::emergency_routes;
use health_profile_cell::router::health_profile_routes;
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>, registry: Arc<CareRegistry>) -> Router {
    Router::new()
        .route("/", get(|| async { "Sehat Setu API is running!" }))
        .nest("/directory", directory_routes(registry.clone()))
        .nest("/appointments", appointment_routes(registry.clone()))
        .nest("/ayushman", ayushman_routes(config.clone()))
        .nest("/emergency", emergency_routes(registry))
        .nest("/profile", health_profile_routes(config))
}
