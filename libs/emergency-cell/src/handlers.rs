// libs/emergency-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::ApiError;

use crate::models::{RequestAmbulanceRequest, HELPLINES};
use crate::services::DispatchService;

pub struct EmergencyState {
    pub dispatch: DispatchService,
}

#[derive(Debug, Default, Deserialize)]
pub struct HospitalAreaQuery {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[axum::debug_handler]
pub async fn list_contacts() -> Json<Value> {
    Json(json!({ "contacts": HELPLINES }))
}

#[axum::debug_handler]
pub async fn list_emergency_hospitals(
    State(state): State<Arc<EmergencyState>>,
    Query(query): Query<HospitalAreaQuery>,
) -> Json<Value> {
    let hospitals = state
        .dispatch
        .emergency_hospitals(query.city.as_deref(), query.state.as_deref());

    Json(json!({
        "hospitals": hospitals,
        "total": hospitals.len()
    }))
}

#[axum::debug_handler]
pub async fn request_ambulance(
    State(state): State<Arc<EmergencyState>>,
    Json(request): Json<RequestAmbulanceRequest>,
) -> Result<Json<Value>, ApiError> {
    let ambulance = state.dispatch.request(request).await?;

    Ok(Json(json!({ "request": ambulance })))
}

#[axum::debug_handler]
pub async fn get_ambulance_request(
    State(state): State<Arc<EmergencyState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let ambulance = state.dispatch.get(request_id).await?;

    Ok(Json(json!({ "request": ambulance })))
}

#[axum::debug_handler]
pub async fn cancel_ambulance_request(
    State(state): State<Arc<EmergencyState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let ambulance = state.dispatch.cancel(request_id).await?;

    Ok(Json(json!({ "request": ambulance })))
}
