// ===== Doctor Search Service =====
// Boundary between raw query strings and the filter engine. Malformed
// criteria never surface as transport errors: the caller always gets a
// result, with the reason recorded on it when parsing failed.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use shared_models::Location;

use crate::engine::{self, FilterResult};
use crate::models::{Doctor, DirectoryError, SearchFilters};
use crate::registry::CareRegistry;

pub struct DoctorSearchService {
    registry: Arc<CareRegistry>,
}

impl DoctorSearchService {
    pub fn new(registry: Arc<CareRegistry>) -> Self {
        Self { registry }
    }

    /// Run a search over the whole directory. Unparseable criteria produce
    /// an empty result carrying the reason instead of an error response.
    #[instrument(skip(self, params))]
    pub fn search(&self, params: &HashMap<String, String>) -> FilterResult {
        let filters = match SearchFilters::from_params(params) {
            Ok(filters) => filters,
            Err(reason) => {
                warn!("rejected search criteria: {}", reason);
                return FilterResult::failed(reason.to_string());
            }
        };

        let result = engine::filter(self.registry.doctors(), &filters);
        debug!(
            total = self.registry.doctors().len(),
            matched = result.doctors.len(),
            "doctor search completed"
        );
        result
    }

    pub fn get(&self, id: &str) -> Result<Doctor, DirectoryError> {
        self.registry
            .doctor(id)
            .cloned()
            .ok_or_else(|| DirectoryError::DoctorNotFound(id.to_string()))
    }

    pub fn specializations(&self) -> Vec<String> {
        self.registry.specializations()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.registry.locations()
    }
}
