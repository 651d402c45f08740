// ===== Dispatch Service =====
// Ambulance request intake. Dispatch is simulated: a request is assigned to
// the first emergency-capable hospital in the caller's city, or parked as
// pending with the 108 helpline hint when none covers it.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use directory_cell::{CareRegistry, Hospital};

use crate::models::{
    AmbulanceRequest, AmbulanceStatus, EmergencyError, RequestAmbulanceRequest,
};

const AMBULANCE_HELPLINE: &str = "108";

pub struct DispatchService {
    registry: Arc<CareRegistry>,
    store: Arc<RwLock<HashMap<Uuid, AmbulanceRequest>>>,
    phone_pattern: Regex,
}

impl DispatchService {
    pub fn new(registry: Arc<CareRegistry>) -> Self {
        Self {
            registry,
            store: Arc::new(RwLock::new(HashMap::new())),
            phone_pattern: Regex::new(r"^[6-9][0-9]{9}$").unwrap(),
        }
    }

    #[instrument(skip(self, request), fields(city = %request.city))]
    pub async fn request(
        &self,
        request: RequestAmbulanceRequest,
    ) -> Result<AmbulanceRequest, EmergencyError> {
        let caller_name = request.caller_name.trim();
        if caller_name.is_empty() {
            return Err(EmergencyError::MissingCallerName);
        }
        let phone = request.phone.trim();
        if !self.phone_pattern.is_match(phone) {
            return Err(EmergencyError::InvalidPhone);
        }

        let assigned = self
            .registry
            .hospitals()
            .iter()
            .find(|h| h.has_emergency && h.location.city.eq_ignore_ascii_case(&request.city));

        let now = Utc::now();
        let mut ambulance = AmbulanceRequest {
            id: Uuid::new_v4(),
            reference_code: reference_code(),
            caller_name: caller_name.to_string(),
            phone: phone.to_string(),
            city: request.city,
            state: request.state,
            location_details: request.location_details,
            status: AmbulanceStatus::Pending,
            assigned_hospital: None,
            eta_minutes: None,
            helpline_hint: None,
            requested_at: now,
            updated_at: now,
        };

        match assigned {
            Some(hospital) => {
                ambulance.status = AmbulanceStatus::Dispatched;
                ambulance.assigned_hospital = Some(hospital.name.clone());
                ambulance.eta_minutes = Some(rand::thread_rng().gen_range(8..=20));
                info!(
                    reference = %ambulance.reference_code,
                    hospital = %hospital.name,
                    "ambulance dispatched"
                );
            }
            None => {
                ambulance.helpline_hint = Some(format!(
                    "No partner emergency hospital in {}; call {} for the nearest ambulance",
                    ambulance.city, AMBULANCE_HELPLINE
                ));
                warn!(
                    reference = %ambulance.reference_code,
                    city = %ambulance.city,
                    "no emergency hospital coverage, request parked as pending"
                );
            }
        }

        self.store
            .write()
            .await
            .insert(ambulance.id, ambulance.clone());
        Ok(ambulance)
    }

    pub async fn get(&self, id: Uuid) -> Result<AmbulanceRequest, EmergencyError> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(EmergencyError::RequestNotFound(id))
    }

    /// Cancel an open request. Already-cancelled requests stay closed.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: Uuid) -> Result<AmbulanceRequest, EmergencyError> {
        let mut store = self.store.write().await;
        let request = store
            .get_mut(&id)
            .ok_or(EmergencyError::RequestNotFound(id))?;
        if request.status == AmbulanceStatus::Cancelled {
            return Err(EmergencyError::AlreadyClosed(request.status));
        }
        request.status = AmbulanceStatus::Cancelled;
        request.updated_at = Utc::now();
        info!(reference = %request.reference_code, "ambulance request cancelled");
        Ok(request.clone())
    }

    /// Emergency-capable hospitals, optionally narrowed by city/state.
    pub fn emergency_hospitals(&self, city: Option<&str>, state: Option<&str>) -> Vec<Hospital> {
        self.registry
            .hospitals()
            .iter()
            .filter(|h| h.has_emergency)
            .filter(|h| {
                city.map_or(true, |c| h.location.city.eq_ignore_ascii_case(c))
                    && state.map_or(true, |s| h.location.state.eq_ignore_ascii_case(s))
            })
            .cloned()
            .collect()
    }
}

// "AMB-" plus six uppercase alphanumerics, e.g. AMB-K27KQD.
fn reference_code() -> String {
    let tail: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("AMB-{}", tail.to_uppercase())
}
