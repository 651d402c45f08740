// =====================================================================================
// DIRECTORY CELL ROUTER
// =====================================================================================

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{
    get_doctor, get_hospital, list_locations, list_specializations, search_doctors,
    search_hospitals, DirectoryState,
};
use crate::registry::CareRegistry;
use crate::services::{DoctorSearchService, HospitalSearchService};

pub fn directory_routes(registry: Arc<CareRegistry>) -> Router {
    let state = Arc::new(DirectoryState {
        doctors: DoctorSearchService::new(registry.clone()),
        hospitals: HospitalSearchService::new(registry),
    });

    Router::new()
        .route("/doctors/search", get(search_doctors))
        .route("/doctors/specializations", get(list_specializations))
        .route("/doctors/locations", get(list_locations))
        .route("/doctors/{doctor_id}", get(get_doctor))
        .route("/hospitals/search", get(search_hospitals))
        .route("/hospitals/{hospital_id}", get(get_hospital))
        .with_state(state)
}
