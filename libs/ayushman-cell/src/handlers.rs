// libs/ayushman-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::ApiError;

use crate::models::VerifyCardRequest;
use crate::services::VerificationService;

pub struct AyushmanState {
    pub verification: VerificationService,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub patient_id: Option<String>,
}

#[axum::debug_handler]
pub async fn verify_card(
    State(state): State<Arc<AyushmanState>>,
    Json(request): Json<VerifyCardRequest>,
) -> Result<Json<Value>, ApiError> {
    let outcome = state.verification.verify(request).await?;

    Ok(Json(json!({ "verification": outcome })))
}

#[axum::debug_handler]
pub async fn list_verifications(
    State(state): State<Arc<AyushmanState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<Value> {
    let records = state
        .verification
        .history(query.patient_id.as_deref())
        .await;

    Json(json!({
        "verifications": records,
        "total": records.len()
    }))
}

#[axum::debug_handler]
pub async fn get_verification(
    State(state): State<Arc<AyushmanState>>,
    Path(record_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let record = state.verification.record(record_id).await?;

    Ok(Json(json!({ "verification": record })))
}
