// libs/health-profile-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::ApiError;

/// The eight ABO/Rh groups; the only accepted `blood_group` values.
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

// ==============================================================================
// PROFILE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub patient_id: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub height_cm: Option<f32>,
    pub weight_kg: Option<f32>,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update payload. On update, absent fields keep their current
/// values; lists are replaced wholesale when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertHealthProfileRequest {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub height_cm: Option<f32>,
    pub weight_kg: Option<f32>,
    pub allergies: Option<Vec<String>>,
    pub chronic_conditions: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

// ==============================================================================
// SHARE CODE MODELS
// ==============================================================================

/// What a first responder sees after scanning the QR: the minimum needed to
/// treat safely, nothing else from the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencySummary {
    pub patient_id: String,
    pub full_name: String,
    pub blood_group: Option<String>,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

impl EmergencySummary {
    pub fn from_profile(profile: &HealthProfile) -> Self {
        Self {
            patient_id: profile.patient_id.clone(),
            full_name: profile.full_name.clone(),
            blood_group: profile.blood_group.clone(),
            allergies: profile.allergies.clone(),
            chronic_conditions: profile.chronic_conditions.clone(),
            medications: profile.medications.clone(),
            emergency_contact_name: profile.emergency_contact_name.clone(),
            emergency_contact_phone: profile.emergency_contact_phone.clone(),
        }
    }
}

/// Signed token payload: summary plus expiry, JSON-encoded then signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareTokenClaims {
    pub summary: EmergencySummary,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareCode {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("no health profile for patient {0}")]
    NotFound(String),

    #[error("full_name is required when creating a profile")]
    MissingFullName,

    #[error("unknown blood group {0:?}")]
    InvalidBloodGroup(String),

    #[error("share code is malformed or has a bad signature")]
    InvalidToken,

    #[error("share code has expired")]
    ExpiredToken,

    #[error("share code signing secret is not set")]
    SecretNotConfigured,
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match &err {
            ProfileError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProfileError::MissingFullName | ProfileError::InvalidBloodGroup(_) => {
                ApiError::Validation(err.to_string())
            }
            ProfileError::InvalidToken | ProfileError::ExpiredToken => {
                ApiError::BadRequest(err.to_string())
            }
            ProfileError::SecretNotConfigured => ApiError::Internal(err.to_string()),
        }
    }
}
