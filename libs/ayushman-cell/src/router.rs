// =====================================================================================
// AYUSHMAN CELL ROUTER
// =====================================================================================

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use shared_config::AppConfig;

use crate::gateway::MockCardGateway;
use crate::handlers::{get_verification, list_verifications, verify_card, AyushmanState};
use crate::services::VerificationService;

pub fn ayushman_routes(config: Arc<AppConfig>) -> Router {
    let gateway = Arc::new(MockCardGateway::new(config.ayushman_verify_delay_ms));
    let state = Arc::new(AyushmanState {
        verification: VerificationService::new(gateway),
    });

    Router::new()
        .route("/verify", post(verify_card))
        .route("/verifications", get(list_verifications))
        .route("/verifications/{record_id}", get(get_verification))
        .with_state(state)
}
