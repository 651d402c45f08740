// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use directory_cell::CareRegistry;

use crate::handlers;
use crate::handlers::AppointmentState;
use crate::services::BookingService;

pub fn appointment_routes(registry: Arc<CareRegistry>) -> Router {
    let state = Arc::new(AppointmentState {
        booking: BookingService::new(registry),
    });

    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route(
            "/{appointment_id}/reschedule",
            post(handlers::reschedule_appointment),
        )
        .route(
            "/{appointment_id}/complete",
            post(handlers::complete_appointment),
        )
        .with_state(state)
}
