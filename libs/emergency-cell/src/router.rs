// =====================================================================================
// EMERGENCY CELL ROUTER
// =====================================================================================

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use directory_cell::CareRegistry;

use crate::handlers::{
    cancel_ambulance_request, get_ambulance_request, list_contacts, list_emergency_hospitals,
    request_ambulance, EmergencyState,
};
use crate::services::DispatchService;

pub fn emergency_routes(registry: Arc<CareRegistry>) -> Router {
    let state = Arc::new(EmergencyState {
        dispatch: DispatchService::new(registry),
    });

    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/hospitals", get(list_emergency_hospitals))
        .route("/ambulance", post(request_ambulance))
        .route("/ambulance/{request_id}", get(get_ambulance_request))
        .route(
            "/ambulance/{request_id}/cancel",
            post(cancel_ambulance_request),
        )
        .with_state(state)
}
