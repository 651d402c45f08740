// libs/ayushman-cell/src/gateway.rs
// Card lookup behind a trait so the verification service stays testable
// against a handful of canned cards.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::models::{AyushmanCard, CardStatus};

#[async_trait]
pub trait CardGateway: Send + Sync {
    async fn lookup(&self, card_number: &str) -> Option<AyushmanCard>;
}

/// Gateway over a fixed fictional card set, with a configurable delay to
/// mimic the upstream round trip.
pub struct MockCardGateway {
    cards: HashMap<String, AyushmanCard>,
    delay: Duration,
}

impl MockCardGateway {
    pub fn new(delay_ms: u64) -> Self {
        Self::with_cards(seed_cards(), delay_ms)
    }

    pub fn with_cards(cards: Vec<AyushmanCard>, delay_ms: u64) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|card| (card.card_number.clone(), card))
                .collect(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl CardGateway for MockCardGateway {
    async fn lookup(&self, card_number: &str) -> Option<AyushmanCard> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!(found = self.cards.contains_key(card_number), "card lookup");
        self.cards.get(card_number).cloned()
    }
}

fn card(
    number: &str,
    holder: &str,
    status: CardStatus,
    valid_until: NaiveDate,
    coverage_limit: u32,
) -> AyushmanCard {
    AyushmanCard {
        card_number: number.to_string(),
        holder_name: holder.to_string(),
        status,
        valid_until,
        coverage_limit,
    }
}

/// Validity windows are anchored to the current date; only Mohan Lal's card
/// is already past its window.
fn seed_cards() -> Vec<AyushmanCard> {
    let today = Utc::now().date_naive();
    vec![
        card(
            "12345678901234",
            "Ramesh Kumar",
            CardStatus::Active,
            today + chrono::Duration::days(3 * 365),
            500_000,
        ),
        card(
            "23456789012345",
            "Sita Devi",
            CardStatus::Active,
            today + chrono::Duration::days(2 * 365),
            500_000,
        ),
        card(
            "34567890123456",
            "Mohan Lal",
            CardStatus::Active,
            today - chrono::Duration::days(400),
            500_000,
        ),
        card(
            "45678901234567",
            "Gita Ben",
            CardStatus::Suspended,
            today + chrono::Duration::days(700),
            500_000,
        ),
        card(
            "56789012345678",
            "Abdul Rashid",
            CardStatus::Active,
            today + chrono::Duration::days(4 * 365),
            500_000,
        ),
    ]
}
