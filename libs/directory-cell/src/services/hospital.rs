// ===== Hospital Search Service =====

use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use crate::models::{DirectoryError, Hospital};
use crate::registry::CareRegistry;

/// Hospital lookup criteria. City and state match case-insensitively so a
/// lowercase deep link ("?city=chennai") still resolves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalFilter {
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialty: Option<String>,
    pub emergency_only: Option<bool>,
}

pub struct HospitalSearchService {
    registry: Arc<CareRegistry>,
}

impl HospitalSearchService {
    pub fn new(registry: Arc<CareRegistry>) -> Self {
        Self { registry }
    }

    #[instrument(skip(self))]
    pub fn search(&self, filter: &HospitalFilter) -> Vec<Hospital> {
        self.registry
            .hospitals()
            .iter()
            .filter(|hospital| Self::matches(filter, hospital))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Hospital, DirectoryError> {
        self.registry
            .hospital(id)
            .cloned()
            .ok_or_else(|| DirectoryError::HospitalNotFound(id.to_string()))
    }

    fn matches(filter: &HospitalFilter, hospital: &Hospital) -> bool {
        let city_ok = filter
            .city
            .as_deref()
            .map_or(true, |city| hospital.location.city.eq_ignore_ascii_case(city));
        let state_ok = filter.state.as_deref().map_or(true, |state| {
            hospital.location.state.eq_ignore_ascii_case(state)
        });
        let specialty_ok = filter.specialty.as_deref().map_or(true, |wanted| {
            hospital
                .specialties
                .iter()
                .any(|s| s.eq_ignore_ascii_case(wanted))
        });
        let emergency_ok = !filter.emergency_only.unwrap_or(false) || hospital.has_emergency;
        city_ok && state_ok && specialty_ok && emergency_ok
    }
}
