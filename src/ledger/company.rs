use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    customer::{Customer, CustomerInfo},
    posting::Posting,
};

/// The insurance company: sole owner of the premium, loan, and penalty
/// ledgers and the source of truth for every balance derived from them.
///
/// `customers` is purely a registry. Any customer affiliated with this
/// company transacts the same way whether or not it was registered through
/// [`Company::add_customer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    premium_payments: Vec<Posting>,
    #[serde(default)]
    loans: Vec<Posting>,
    #[serde(default)]
    penalties: Vec<Posting>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customers: Vec::new(),
            premium_payments: Vec::new(),
            loans: Vec::new(),
            penalties: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a customer affiliated with this company, registers it, and
    /// returns it.
    pub fn add_customer(&mut self, info: CustomerInfo) -> Customer {
        let customer = Customer::new(info, self);
        self.customers.push(customer.clone());
        self.touch();
        customer
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn premium_payments(&self) -> &[Posting] {
        &self.premium_payments
    }

    pub fn loans(&self) -> &[Posting] {
        &self.loans
    }

    pub fn penalties(&self) -> &[Posting] {
        &self.penalties
    }

    /// Collects a premium payment from `from`.
    pub fn collect(&mut self, amount_cents: i64, from: &Customer) -> Result<(), LedgerError> {
        self.check_posting(amount_cents, from)?;
        self.premium_payments
            .push(Posting::new(from.id, amount_cents));
        self.touch();
        tracing::debug!(customer = %from.id, amount_cents, "premium collected");
        Ok(())
    }

    /// Records a penalty against `customer`.
    pub fn penalize(&mut self, amount_cents: i64, customer: &Customer) -> Result<(), LedgerError> {
        self.check_posting(amount_cents, customer)?;
        self.penalties.push(Posting::new(customer.id, amount_cents));
        self.touch();
        tracing::debug!(customer = %customer.id, amount_cents, "penalty recorded");
        Ok(())
    }

    /// Grants a loan to `to`, capped at the customer's current cash value.
    ///
    /// The eligibility check runs before anything is appended, so a rejected
    /// loan leaves the ledgers untouched.
    pub fn loan(&mut self, amount_cents: i64, to: &Customer) -> Result<(), LedgerError> {
        self.check_posting(amount_cents, to)?;
        let available_cents = self.cash_value_of(to);
        if amount_cents > available_cents {
            tracing::warn!(
                customer = %to.id,
                amount_cents,
                available_cents,
                "loan rejected"
            );
            return Err(LedgerError::InsufficientCashValue {
                requested_cents: amount_cents,
                available_cents,
            });
        }
        self.loans.push(Posting::new(to.id, amount_cents));
        self.touch();
        tracing::debug!(customer = %to.id, amount_cents, "loan granted");
        Ok(())
    }

    /// Company-wide premium total across all customers.
    pub fn pile_of_cash(&self) -> i64 {
        Self::total(&self.premium_payments)
    }

    /// Outstanding loan total for `customer`.
    pub fn loan_balance_of(&self, customer: &Customer) -> i64 {
        Self::total_for(&self.loans, customer.id)
    }

    /// Accumulated penalties for `customer`.
    pub fn penalties_on(&self, customer: &Customer) -> i64 {
        Self::total_for(&self.penalties, customer.id)
    }

    /// Net cash value: premiums paid minus penalties and outstanding loans.
    pub fn cash_value_of(&self, customer: &Customer) -> i64 {
        let premiums = Self::total_for(&self.premium_payments, customer.id);
        premiums - self.penalties_on(customer) - self.loan_balance_of(customer)
    }

    /// Point-in-time balance breakdown for `customer`.
    pub fn statement_of(&self, customer: &Customer) -> CustomerStatement {
        let premiums_cents = Self::total_for(&self.premium_payments, customer.id);
        let penalties_cents = self.penalties_on(customer);
        let loan_balance_cents = self.loan_balance_of(customer);
        CustomerStatement {
            customer_id: customer.id,
            premiums_cents,
            penalties_cents,
            loan_balance_cents,
            cash_value_cents: premiums_cents - penalties_cents - loan_balance_cents,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn check_posting(&self, amount_cents: i64, customer: &Customer) -> Result<(), LedgerError> {
        if amount_cents < 0 {
            return Err(LedgerError::InvalidArgument(format!(
                "amount must be non-negative, got {}",
                amount_cents
            )));
        }
        if customer.company_id != self.id {
            return Err(LedgerError::InvalidArgument(format!(
                "customer {} belongs to a different company",
                customer.id
            )));
        }
        Ok(())
    }

    fn total(postings: &[Posting]) -> i64 {
        postings.iter().map(|posting| posting.amount_cents).sum()
    }

    fn total_for(postings: &[Posting], customer_id: Uuid) -> i64 {
        postings
            .iter()
            .filter(|posting| posting.customer_id == customer_id)
            .map(|posting| posting.amount_cents)
            .sum()
    }
}

impl Default for Company {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-customer balance summary derived from the three ledgers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerStatement {
    pub customer_id: Uuid,
    pub premiums_cents: i64,
    pub penalties_cents: i64,
    pub loan_balance_cents: i64,
    pub cash_value_cents: i64,
}
