// ===== Verification Service =====
// Classifies a card against the gateway and keeps the attempt history.
// Full card numbers are masked before anything is stored or returned.

use chrono::Utc;
use regex::Regex;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::gateway::CardGateway;
use crate::models::{
    AyushmanError, CardStatus, VerificationOutcome, VerificationRecord, VerificationStatus,
    VerifyCardRequest,
};

pub struct VerificationService {
    gateway: Arc<dyn CardGateway>,
    history: Arc<RwLock<Vec<VerificationRecord>>>,
    card_pattern: Regex,
}

impl VerificationService {
    pub fn new(gateway: Arc<dyn CardGateway>) -> Self {
        Self {
            gateway,
            history: Arc::new(RwLock::new(Vec::new())),
            card_pattern: Regex::new(r"^[0-9]{14}$").unwrap(),
        }
    }

    /// Verify a card. Input failures (bad number, blank name) error out
    /// without touching history; every gateway-classified outcome is
    /// recorded, verified or not.
    #[instrument(skip(self, request))]
    pub async fn verify(
        &self,
        request: VerifyCardRequest,
    ) -> Result<VerificationOutcome, AyushmanError> {
        let card_number = request.card_number.trim();
        if !self.card_pattern.is_match(card_number) {
            return Err(AyushmanError::InvalidCardNumber);
        }
        let holder_name = request.holder_name.trim();
        if holder_name.is_empty() {
            return Err(AyushmanError::MissingHolderName);
        }

        let card = self.gateway.lookup(card_number).await;
        let today = Utc::now().date_naive();
        let (status, coverage) = match &card {
            None => (VerificationStatus::NotFound, None),
            Some(card) if !names_match(&card.holder_name, holder_name) => {
                (VerificationStatus::NameMismatch, None)
            }
            Some(card) if card.valid_until < today => (VerificationStatus::Expired, None),
            Some(card) if card.status == CardStatus::Suspended => {
                (VerificationStatus::Suspended, None)
            }
            Some(card) => (
                VerificationStatus::Verified,
                Some((card.coverage_limit, card.valid_until)),
            ),
        };

        let record = VerificationRecord {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            masked_card_number: mask_card_number(card_number),
            status,
            checked_at: Utc::now(),
        };
        self.history.write().await.push(record.clone());
        info!(record_id = %record.id, ?status, "card verification recorded");

        Ok(VerificationOutcome {
            record,
            coverage_limit: coverage.map(|(limit, _)| limit),
            valid_until: coverage.map(|(_, until)| until),
        })
    }

    /// Attempt history, newest first, optionally narrowed to one patient.
    pub async fn history(&self, patient_id: Option<&str>) -> Vec<VerificationRecord> {
        self.history
            .read()
            .await
            .iter()
            .rev()
            .filter(|record| {
                patient_id.map_or(true, |wanted| {
                    record.patient_id.as_deref() == Some(wanted)
                })
            })
            .cloned()
            .collect()
    }

    pub async fn record(&self, id: Uuid) -> Result<VerificationRecord, AyushmanError> {
        self.history
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(AyushmanError::RecordNotFound(id))
    }
}

// Case-insensitive, whitespace-normalized comparison. "ramesh  kumar"
// matches "Ramesh Kumar".
fn names_match(registered: &str, claimed: &str) -> bool {
    let normalize = |name: &str| {
        name.split_whitespace()
            .map(|part| part.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    };
    normalize(registered) == normalize(claimed)
}

fn mask_card_number(card_number: &str) -> String {
    let visible = 4.min(card_number.len());
    let hidden = card_number.len() - visible;
    format!("{}{}", "*".repeat(hidden), &card_number[hidden..])
}
