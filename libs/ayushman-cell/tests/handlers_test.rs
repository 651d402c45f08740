// libs/ayushman-cell/tests/handlers_test.rs
// Verification outcomes and history, driven through the handlers with an
// instant (zero delay) gateway.

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use ayushman_cell::handlers::*;
use ayushman_cell::models::VerifyCardRequest;
use ayushman_cell::{MockCardGateway, VerificationService};
use shared_models::error::ApiError;

fn create_state() -> State<Arc<AyushmanState>> {
    let gateway = Arc::new(MockCardGateway::new(0));
    State(Arc::new(AyushmanState {
        verification: VerificationService::new(gateway),
    }))
}

fn request(card_number: &str, holder_name: &str) -> VerifyCardRequest {
    VerifyCardRequest {
        card_number: card_number.to_string(),
        holder_name: holder_name.to_string(),
        patient_id: Some("patient-1".to_string()),
    }
}

async fn verify(state: &State<Arc<AyushmanState>>, req: VerifyCardRequest) -> Value {
    verify_card(State(state.0.clone()), Json(req))
        .await
        .expect("verification should classify, not error")
        .0
}

#[tokio::test]
async fn test_active_card_with_matching_name_is_verified() {
    let state = create_state();

    let response = verify(&state, request("12345678901234", "  ramesh   KUMAR ")).await;

    let verification = &response["verification"];
    assert_eq!(verification["status"], "verified");
    assert_eq!(verification["masked_card_number"], "**********1234");
    assert_eq!(verification["coverage_limit"], 500_000);
    // The seed set keeps this card in force, so the reported window must
    // still be open.
    let valid_until: NaiveDate = verification["valid_until"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(valid_until > Utc::now().date_naive());
}

#[tokio::test]
async fn test_wrong_holder_name_is_a_mismatch() {
    let state = create_state();

    let response = verify(&state, request("12345678901234", "Suresh Kumar")).await;

    assert_eq!(response["verification"]["status"], "name_mismatch");
    assert!(response["verification"]["coverage_limit"].is_null());
}

#[tokio::test]
async fn test_lapsed_card_is_expired() {
    let state = create_state();

    let response = verify(&state, request("34567890123456", "Mohan Lal")).await;

    assert_eq!(response["verification"]["status"], "expired");
}

#[tokio::test]
async fn test_suspended_card_is_reported() {
    let state = create_state();

    let response = verify(&state, request("45678901234567", "Gita Ben")).await;

    assert_eq!(response["verification"]["status"], "suspended");
}

#[tokio::test]
async fn test_unknown_card_is_not_found_but_recorded() {
    let state = create_state();

    let response = verify(&state, request("99999999999999", "Nobody Here")).await;
    assert_eq!(response["verification"]["status"], "not_found");

    let history = list_verifications(
        State(state.0.clone()),
        Query(HistoryQuery { patient_id: None }),
    )
    .await
    .0;
    assert_eq!(history["total"], 1);
}

#[tokio::test]
async fn test_malformed_card_number_is_rejected_without_history() {
    let state = create_state();

    for bad in ["1234", "1234567890123a", "123456789012345"] {
        let result = verify_card(State(state.0.clone()), Json(request(bad, "Ramesh Kumar"))).await;
        assert_matches!(result.unwrap_err(), ApiError::Validation(_));
    }

    let history = list_verifications(
        State(state.0.clone()),
        Query(HistoryQuery { patient_id: None }),
    )
    .await
    .0;
    assert_eq!(history["total"], 0);
}

#[tokio::test]
async fn test_blank_holder_name_is_rejected() {
    let state = create_state();

    let result = verify_card(
        State(state.0.clone()),
        Json(request("12345678901234", "   ")),
    )
    .await;

    assert_matches!(result.unwrap_err(), ApiError::Validation(_));
}

#[tokio::test]
async fn test_history_is_newest_first_and_filterable() {
    let state = create_state();
    verify(&state, request("12345678901234", "Ramesh Kumar")).await;
    let mut second = request("23456789012345", "Sita Devi");
    second.patient_id = Some("patient-2".to_string());
    let second_response = verify(&state, second).await;
    let second_id = second_response["verification"]["id"].as_str().unwrap().to_string();

    let history = list_verifications(
        State(state.0.clone()),
        Query(HistoryQuery { patient_id: None }),
    )
    .await
    .0;
    assert_eq!(history["total"], 2);
    // Most recent attempt leads the list.
    assert_eq!(history["verifications"][0]["id"], second_id.as_str());

    let filtered = list_verifications(
        State(state.0.clone()),
        Query(HistoryQuery {
            patient_id: Some("patient-2".to_string()),
        }),
    )
    .await
    .0;
    assert_eq!(filtered["total"], 1);

    let fetched = get_verification(
        State(state.0.clone()),
        Path(Uuid::parse_str(&second_id).unwrap()),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(fetched["verification"]["status"], "verified");
}

#[tokio::test]
async fn test_get_verification_not_found() {
    let state = create_state();

    let result = get_verification(State(state.0.clone()), Path(Uuid::new_v4())).await;

    assert_matches!(result.unwrap_err(), ApiError::NotFound(_));
}
