// ===== Health Profile Service =====
// Create-or-update profile store keyed by patient id. Partial updates keep
// whatever the request leaves out.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::models::{HealthProfile, ProfileError, UpsertHealthProfileRequest, BLOOD_GROUPS};

pub struct HealthProfileService {
    store: Arc<RwLock<HashMap<String, HealthProfile>>>,
}

impl HealthProfileService {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn upsert(
        &self,
        patient_id: &str,
        request: UpsertHealthProfileRequest,
    ) -> Result<HealthProfile, ProfileError> {
        let blood_group = match request.blood_group {
            Some(raw) => Some(canonical_blood_group(&raw)?),
            None => None,
        };

        let mut store = self.store.write().await;
        let now = Utc::now();

        let profile = match store.get_mut(patient_id) {
            Some(existing) => {
                if let Some(full_name) = request.full_name {
                    existing.full_name = full_name;
                }
                if request.date_of_birth.is_some() {
                    existing.date_of_birth = request.date_of_birth;
                }
                if request.gender.is_some() {
                    existing.gender = request.gender;
                }
                if blood_group.is_some() {
                    existing.blood_group = blood_group;
                }
                if request.height_cm.is_some() {
                    existing.height_cm = request.height_cm;
                }
                if request.weight_kg.is_some() {
                    existing.weight_kg = request.weight_kg;
                }
                if let Some(allergies) = request.allergies {
                    existing.allergies = allergies;
                }
                if let Some(conditions) = request.chronic_conditions {
                    existing.chronic_conditions = conditions;
                }
                if let Some(medications) = request.medications {
                    existing.medications = medications;
                }
                if request.emergency_contact_name.is_some() {
                    existing.emergency_contact_name = request.emergency_contact_name;
                }
                if request.emergency_contact_phone.is_some() {
                    existing.emergency_contact_phone = request.emergency_contact_phone;
                }
                existing.updated_at = now;
                debug!(patient_id, "health profile updated");
                existing.clone()
            }
            None => {
                let full_name = request
                    .full_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or(ProfileError::MissingFullName)?
                    .to_string();
                let profile = HealthProfile {
                    patient_id: patient_id.to_string(),
                    full_name,
                    date_of_birth: request.date_of_birth,
                    gender: request.gender,
                    blood_group,
                    height_cm: request.height_cm,
                    weight_kg: request.weight_kg,
                    allergies: request.allergies.unwrap_or_default(),
                    chronic_conditions: request.chronic_conditions.unwrap_or_default(),
                    medications: request.medications.unwrap_or_default(),
                    emergency_contact_name: request.emergency_contact_name,
                    emergency_contact_phone: request.emergency_contact_phone,
                    created_at: now,
                    updated_at: now,
                };
                store.insert(patient_id.to_string(), profile.clone());
                debug!(patient_id, "health profile created");
                profile
            }
        };

        Ok(profile)
    }

    pub async fn get(&self, patient_id: &str) -> Result<HealthProfile, ProfileError> {
        self.store
            .read()
            .await
            .get(patient_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(patient_id.to_string()))
    }
}

impl Default for HealthProfileService {
    fn default() -> Self {
        Self::new()
    }
}

// "o+" and " AB- " are accepted and stored canonically.
fn canonical_blood_group(raw: &str) -> Result<String, ProfileError> {
    let candidate = raw.trim().to_uppercase();
    BLOOD_GROUPS
        .iter()
        .find(|&&group| group == candidate)
        .map(|&group| group.to_string())
        .ok_or_else(|| ProfileError::InvalidBloodGroup(raw.to_string()))
}
