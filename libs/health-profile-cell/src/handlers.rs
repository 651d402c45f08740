// libs/health-profile-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::ApiError;

use crate::models::{EmergencySummary, UpsertHealthProfileRequest};
use crate::services::{HealthProfileService, ShareTokenService};

pub struct ProfileState {
    pub profiles: HealthProfileService,
    pub share: ShareTokenService,
}

#[axum::debug_handler]
pub async fn upsert_health_profile(
    State(state): State<Arc<ProfileState>>,
    Path(patient_id): Path<String>,
    Json(request): Json<UpsertHealthProfileRequest>,
) -> Result<Json<Value>, ApiError> {
    let profile = state.profiles.upsert(&patient_id, request).await?;

    Ok(Json(json!({ "profile": profile })))
}

#[axum::debug_handler]
pub async fn get_health_profile(
    State(state): State<Arc<ProfileState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let profile = state.profiles.get(&patient_id).await?;

    Ok(Json(json!({ "profile": profile })))
}

/// Mint a share code for the patient's emergency summary. The token is what
/// the app renders as a QR image.
#[axum::debug_handler]
pub async fn create_share_code(
    State(state): State<Arc<ProfileState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let profile = state.profiles.get(&patient_id).await?;
    let code = state.share.issue(EmergencySummary::from_profile(&profile))?;

    Ok(Json(json!({ "share": code })))
}

#[axum::debug_handler]
pub async fn resolve_share_code(
    State(state): State<Arc<ProfileState>>,
    Path(token): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let summary = state.share.resolve(&token)?;

    Ok(Json(json!({ "summary": summary })))
}
