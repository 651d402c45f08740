// =====================================================================================
// HEALTH PROFILE CELL ROUTER
// =====================================================================================

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use shared_config::AppConfig;

use crate::handlers;
use crate::handlers::ProfileState;
use crate::services::{HealthProfileService, ShareTokenService};

pub fn health_profile_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(ProfileState {
        profiles: HealthProfileService::new(),
        share: ShareTokenService::new(
            config.share_token_secret.clone(),
            config.share_token_ttl_minutes,
        ),
    });

    Router::new()
        .route("/shared/{token}", get(handlers::resolve_share_code))
        .route("/{patient_id}", put(handlers::upsert_health_profile))
        .route("/{patient_id}", get(handlers::get_health_profile))
        .route("/{patient_id}/share", post(handlers::create_share_code))
        .with_state(state)
}
