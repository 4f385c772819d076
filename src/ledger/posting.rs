use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single append-only ledger record attributing an amount to a customer.
///
/// The same shape backs all three ledgers (premiums, loans, penalties);
/// which ledger a posting sits in determines its meaning. Amounts are minor
/// currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posting {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount_cents: i64,
    pub posted_at: DateTime<Utc>,
}

impl Posting {
    pub fn new(customer_id: Uuid, amount_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            amount_cents,
            posted_at: Utc::now(),
        }
    }
}
