// libs/appointment-cell/tests/handlers_test.rs
// Booking lifecycle coverage, driven through the handlers.

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use appointment_cell::handlers::*;
use appointment_cell::models::*;
use directory_cell::CareRegistry;
use shared_models::error::ApiError;

fn create_state() -> State<Arc<AppointmentState>> {
    let registry = Arc::new(CareRegistry::seeded().unwrap());
    State(Arc::new(AppointmentState {
        booking: appointment_cell::BookingService::new(registry),
    }))
}

fn book_request(doctor_id: &str, date: NaiveDate, slot: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_id: "patient-1".to_string(),
        doctor_id: doctor_id.to_string(),
        date,
        slot: slot.to_string(),
        mode: ConsultationMode::InPerson,
    }
}

// Booking rejects past dates; fixtures stay relative to today.
fn days_ahead(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

async fn book_ok(state: &State<Arc<AppointmentState>>, request: BookAppointmentRequest) -> Uuid {
    let response = book_appointment(State(state.0.clone()), Json(request))
        .await
        .expect("booking should succeed")
        .0;
    Uuid::parse_str(response["appointment"]["id"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_book_appointment_success() {
    let state = create_state();

    let result = book_appointment(
        State(state.0.clone()),
        Json(book_request("doc-001", days_ahead(30), "09:00 AM")),
    )
    .await;

    let response = result.unwrap().0;
    let appointment = &response["appointment"];
    assert_eq!(appointment["doctor_name"], "Dr. Ananya Iyer");
    assert_eq!(appointment["status"], "confirmed");
    assert_eq!(appointment["consultation_fee"], 1000);
}

#[tokio::test]
async fn test_book_appointment_unknown_doctor() {
    let state = create_state();

    let result = book_appointment(
        State(state.0.clone()),
        Json(book_request("doc-999", days_ahead(30), "09:00 AM")),
    )
    .await;

    assert_matches!(result.unwrap_err(), ApiError::NotFound(_));
}

#[tokio::test]
async fn test_book_appointment_slot_not_offered() {
    let state = create_state();

    let result = book_appointment(
        State(state.0.clone()),
        Json(book_request("doc-001", days_ahead(30), "03:33 AM")),
    )
    .await;

    assert_matches!(result.unwrap_err(), ApiError::Validation(_));
}

#[tokio::test]
async fn test_book_appointment_past_date() {
    let state = create_state();

    let result = book_appointment(
        State(state.0.clone()),
        Json(book_request("doc-001", days_ahead(-1), "09:00 AM")),
    )
    .await;

    assert_matches!(result.unwrap_err(), ApiError::Validation(_));
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let state = create_state();
    let visit = days_ahead(30);
    book_ok(&state, book_request("doc-001", visit, "09:00 AM")).await;

    let mut second = book_request("doc-001", visit, "09:00 AM");
    second.patient_id = "patient-2".to_string();
    let result = book_appointment(State(state.0.clone()), Json(second)).await;

    assert_matches!(result.unwrap_err(), ApiError::Conflict(_));
}

#[tokio::test]
async fn test_cancel_frees_the_slot() {
    let state = create_state();
    let visit = days_ahead(30);
    let id = book_ok(&state, book_request("doc-001", visit, "09:00 AM")).await;

    let response = cancel_appointment(
        State(state.0.clone()),
        Path(id),
        Json(CancelAppointmentRequest {
            reason: Some("travel".to_string()),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(response["appointment"]["status"], "cancelled");
    assert_eq!(response["appointment"]["notes"], "travel");

    // Same slot is bookable again after the cancellation.
    book_ok(&state, book_request("doc-001", visit, "09:00 AM")).await;
}

#[tokio::test]
async fn test_cancel_twice_is_a_conflict() {
    let state = create_state();
    let id = book_ok(&state, book_request("doc-001", days_ahead(30), "09:00 AM")).await;

    cancel_appointment(
        State(state.0.clone()),
        Path(id),
        Json(CancelAppointmentRequest::default()),
    )
    .await
    .unwrap();

    let result = cancel_appointment(
        State(state.0.clone()),
        Path(id),
        Json(CancelAppointmentRequest::default()),
    )
    .await;
    assert_matches!(result.unwrap_err(), ApiError::Conflict(_));
}

#[tokio::test]
async fn test_reschedule_moves_and_frees_the_old_slot() {
    let state = create_state();
    let original = days_ahead(30);
    let moved = days_ahead(31);
    let id = book_ok(&state, book_request("doc-001", original, "09:00 AM")).await;

    let response = reschedule_appointment(
        State(state.0.clone()),
        Path(id),
        Json(RescheduleAppointmentRequest {
            date: moved,
            slot: "11:00 AM".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(response["appointment"]["date"], moved.to_string());
    assert_eq!(response["appointment"]["slot"], "11:00 AM");

    // The vacated slot is open again.
    book_ok(&state, book_request("doc-001", original, "09:00 AM")).await;
}

#[tokio::test]
async fn test_completed_appointment_cannot_be_rescheduled() {
    let state = create_state();
    let id = book_ok(&state, book_request("doc-001", days_ahead(30), "09:00 AM")).await;

    complete_appointment(State(state.0.clone()), Path(id))
        .await
        .unwrap();

    let result = reschedule_appointment(
        State(state.0.clone()),
        Path(id),
        Json(RescheduleAppointmentRequest {
            date: days_ahead(32),
            slot: "09:30 AM".to_string(),
        }),
    )
    .await;
    assert_matches!(result.unwrap_err(), ApiError::Conflict(_));
}

#[tokio::test]
async fn test_list_is_chronological_and_filterable() {
    let state = create_state();
    let near = days_ahead(30);
    let far = days_ahead(31);
    // Booked out of visit order on purpose.
    book_ok(&state, book_request("doc-001", far, "09:00 AM")).await;
    book_ok(&state, book_request("doc-001", near, "04:00 PM")).await;
    book_ok(&state, book_request("doc-001", near, "09:30 AM")).await;
    let mut other = book_request("doc-003", near, "12:00 PM");
    other.patient_id = "patient-2".to_string();
    book_ok(&state, other).await;

    let response = list_appointments(State(state.0.clone()), Query(AppointmentFilter::default()))
        .await
        .0;
    assert_eq!(response["total"], 4);
    let slots: Vec<String> = response["appointments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| {
            format!(
                "{} {}",
                a["date"].as_str().unwrap(),
                a["slot"].as_str().unwrap()
            )
        })
        .collect();
    assert_eq!(
        slots,
        vec![
            format!("{} 09:30 AM", near),
            format!("{} 12:00 PM", near),
            format!("{} 04:00 PM", near),
            format!("{} 09:00 AM", far),
        ]
    );

    let response = list_appointments(
        State(state.0.clone()),
        Query(AppointmentFilter {
            patient_id: Some("patient-2".to_string()),
            ..Default::default()
        }),
    )
    .await
    .0;
    assert_eq!(response["total"], 1);
    assert_eq!(
        response["appointments"][0]["doctor_name"],
        "Dr. Kavitha Rao"
    );
}

#[tokio::test]
async fn test_get_appointment_not_found() {
    let state = create_state();

    let result = get_appointment(State(state.0.clone()), Path(Uuid::new_v4())).await;

    assert_matches!(result.unwrap_err(), ApiError::NotFound(_));
}
