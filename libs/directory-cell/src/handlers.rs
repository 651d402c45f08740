use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::ApiError;

use crate::services::{DoctorSearchService, HospitalFilter, HospitalSearchService};

/// Shared state for directory routes, built once in the router.
pub struct DirectoryState {
    pub doctors: DoctorSearchService,
    pub hospitals: HospitalSearchService,
}

// ==============================================================================
// DOCTOR ENDPOINTS
// ==============================================================================

/// Search always answers 200: malformed criteria come back as an empty
/// result with the reason in `error`, so stale client UIs never crash.
#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<DirectoryState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let result = state.doctors.search(&params);

    Json(json!({
        "doctors": result.doctors,
        "total": result.doctors.len(),
        "error": result.error
    }))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DirectoryState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let doctor = state
        .doctors
        .get(&doctor_id)
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    Ok(Json(json!({ "doctor": doctor })))
}

#[axum::debug_handler]
pub async fn list_specializations(
    State(state): State<Arc<DirectoryState>>,
) -> Json<Value> {
    Json(json!({ "specializations": state.doctors.specializations() }))
}

#[axum::debug_handler]
pub async fn list_locations(State(state): State<Arc<DirectoryState>>) -> Json<Value> {
    Json(json!({ "locations": state.doctors.locations() }))
}

// ==============================================================================
// HOSPITAL ENDPOINTS
// ==============================================================================

#[axum::debug_handler]
pub async fn search_hospitals(
    State(state): State<Arc<DirectoryState>>,
    Query(filter): Query<HospitalFilter>,
) -> Json<Value> {
    let hospitals = state.hospitals.search(&filter);

    Json(json!({
        "hospitals": hospitals,
        "total": hospitals.len()
    }))
}

#[axum::debug_handler]
pub async fn get_hospital(
    State(state): State<Arc<DirectoryState>>,
    Path(hospital_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let hospital = state
        .hospitals
        .get(&hospital_id)
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    Ok(Json(json!({ "hospital": hospital })))
}
