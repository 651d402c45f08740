// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::ApiError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked consultation. Doctor fields are denormalized at booking time so
/// the appointment list renders without a registry lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialization: String,
    pub hospital: String,
    pub consultation_fee: u32,
    pub date: NaiveDate,
    pub slot: String,
    pub slot_time: NaiveTime,
    pub mode: ConsultationMode,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationMode {
    InPerson,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub slot: String,
    #[serde(default = "default_mode")]
    pub mode: ConsultationMode,
}

fn default_mode() -> ConsultationMode {
    ConsultationMode::InPerson
}

#[derive(Debug, Clone, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub date: NaiveDate,
    pub slot: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancelAppointmentRequest {
    pub reason: Option<String>,
}

/// List criteria, AND-combined like the doctor search filters. Absent
/// fields disable their predicate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    pub patient_id: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub q: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, Error)]
pub enum AppointmentError {
    #[error("doctor {0} not found")]
    DoctorNotFound(String),

    #[error("doctor {doctor_id} does not offer slot {slot:?}")]
    SlotNotOffered { doctor_id: String, slot: String },

    #[error("slot {slot:?} on {date} is already booked for doctor {doctor_id}")]
    SlotTaken {
        doctor_id: String,
        date: NaiveDate,
        slot: String,
    },

    #[error("cannot book on past date {0}")]
    PastDate(NaiveDate),

    #[error("slot {0:?} is not a recognizable time")]
    UnparseableSlot(String),

    #[error("appointment {0} not found")]
    NotFound(Uuid),

    #[error("cannot {action} a {status} appointment")]
    InvalidTransition {
        status: AppointmentStatus,
        action: &'static str,
    },
}

impl From<AppointmentError> for ApiError {
    fn from(err: AppointmentError) -> Self {
        match &err {
            AppointmentError::NotFound(_) | AppointmentError::DoctorNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            AppointmentError::SlotNotOffered { .. }
            | AppointmentError::PastDate(_)
            | AppointmentError::UnparseableSlot(_) => ApiError::Validation(err.to_string()),
            AppointmentError::SlotTaken { .. } | AppointmentError::InvalidTransition { .. } => {
                ApiError::Conflict(err.to_string())
            }
        }
    }
}
