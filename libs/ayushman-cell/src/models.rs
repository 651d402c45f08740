// libs/ayushman-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::ApiError;

// ==============================================================================
// CARD MODELS
// ==============================================================================

/// An Ayushman Bharat (PM-JAY) card as returned by the card gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AyushmanCard {
    pub card_number: String,
    pub holder_name: String,
    pub status: CardStatus,
    pub valid_until: NaiveDate,
    /// Annual family coverage limit in INR.
    pub coverage_limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Active,
    Suspended,
}

// ==============================================================================
// VERIFICATION MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyCardRequest {
    pub card_number: String,
    pub holder_name: String,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    NotFound,
    NameMismatch,
    Expired,
    Suspended,
}

/// One verification attempt as kept in history. The card number is stored
/// masked; the full number never leaves the gateway boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub patient_id: Option<String>,
    pub masked_card_number: String,
    pub status: VerificationStatus,
    pub checked_at: DateTime<Utc>,
}

/// Verify response: the history record plus coverage details when the card
/// checked out.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    #[serde(flatten)]
    pub record: VerificationRecord,
    pub coverage_limit: Option<u32>,
    pub valid_until: Option<NaiveDate>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, Error)]
pub enum AyushmanError {
    #[error("card number must be exactly 14 digits")]
    InvalidCardNumber,

    #[error("holder name must not be blank")]
    MissingHolderName,

    #[error("verification record {0} not found")]
    RecordNotFound(Uuid),
}

impl From<AyushmanError> for ApiError {
    fn from(err: AyushmanError) -> Self {
        match &err {
            AyushmanError::InvalidCardNumber | AyushmanError::MissingHolderName => {
                ApiError::Validation(err.to_string())
            }
            AyushmanError::RecordNotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}
