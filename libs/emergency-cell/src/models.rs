// libs/emergency-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::ApiError;

// ==============================================================================
// HELPLINES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

/// National helplines, always available regardless of app state.
pub const HELPLINES: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Ambulance",
        number: "108",
        description: "Free emergency ambulance service",
    },
    EmergencyContact {
        name: "National Emergency",
        number: "112",
        description: "All-in-one emergency helpline",
    },
    EmergencyContact {
        name: "Police",
        number: "100",
        description: "Police control room",
    },
    EmergencyContact {
        name: "Fire",
        number: "101",
        description: "Fire and rescue services",
    },
    EmergencyContact {
        name: "Women Helpline",
        number: "1091",
        description: "Women in distress",
    },
    EmergencyContact {
        name: "Child Helpline",
        number: "1098",
        description: "Children in need of care and protection",
    },
];

// ==============================================================================
// AMBULANCE REQUESTS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbulanceRequest {
    pub id: Uuid,
    /// Short code the caller can read out to the crew.
    pub reference_code: String,
    pub caller_name: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub location_details: Option<String>,
    pub status: AmbulanceStatus,
    pub assigned_hospital: Option<String>,
    pub eta_minutes: Option<u32>,
    /// Populated when no emergency hospital covers the caller's city.
    pub helpline_hint: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbulanceStatus {
    Pending,
    Dispatched,
    Cancelled,
}

impl fmt::Display for AmbulanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbulanceStatus::Pending => write!(f, "pending"),
            AmbulanceStatus::Dispatched => write!(f, "dispatched"),
            AmbulanceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestAmbulanceRequest {
    pub caller_name: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub location_details: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, Error)]
pub enum EmergencyError {
    #[error("caller name must not be blank")]
    MissingCallerName,

    #[error("phone must be a 10 digit Indian mobile number")]
    InvalidPhone,

    #[error("ambulance request {0} not found")]
    RequestNotFound(Uuid),

    #[error("cannot cancel a {0} request")]
    AlreadyClosed(AmbulanceStatus),
}

impl From<EmergencyError> for ApiError {
    fn from(err: EmergencyError) -> Self {
        match &err {
            EmergencyError::MissingCallerName | EmergencyError::InvalidPhone => {
                ApiError::Validation(err.to_string())
            }
            EmergencyError::RequestNotFound(_) => ApiError::NotFound(err.to_string()),
            EmergencyError::AlreadyClosed(_) => ApiError::Conflict(err.to_string()),
        }
    }
}
