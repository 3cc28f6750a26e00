use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Cents;

pub type AccountId = Uuid;

/// A bank account in the ledger.
///
/// Balances are stored as integer cents and must stay exact; all mutation
/// goes through `credit`/`debit` so the arithmetic lives in one place.
/// The `active` flag gates participation in deposits and transfers, but an
/// inactive account can still be looked up and its balance read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub holder_name: String,
    pub balance_cents: Cents,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(holder_name: impl Into<String>, balance_cents: Cents) -> Self {
        Self {
            id: Uuid::new_v4(),
            holder_name: holder_name.into(),
            balance_cents,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Add `amount` cents to the balance.
    pub fn credit(&mut self, amount: Cents) {
        self.balance_cents += amount;
    }

    /// Remove `amount` cents from the balance. No sufficiency check here;
    /// whether overdrawing is allowed is the caller's decision.
    pub fn debit(&mut self, amount: Cents) {
        self.balance_cents -= amount;
    }
}
