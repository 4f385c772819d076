use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::company::Company;

/// Identifying details attached to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl CustomerInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attaches an arbitrary key/value attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Default for CustomerInfo {
    fn default() -> Self {
        Self::named("John Doe")
    }
}

/// A policyholder. Financial state lives entirely on the company's ledgers;
/// the customer carries its identity and a back-reference by company id.
///
/// Two customers with identical info are distinct ledger participants;
/// attribution is by `id`, never by the info contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub info: CustomerInfo,
    pub company_id: Uuid,
}

impl Customer {
    /// Creates a customer affiliated with `company`. The customer transacts
    /// whether or not it is ever registered via [`Company::add_customer`].
    pub fn new(info: CustomerInfo, company: &Company) -> Self {
        Self {
            id: Uuid::new_v4(),
            info,
            company_id: company.id,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Pays a premium into `company`.
    pub fn make_payment(
        &self,
        company: &mut Company,
        amount_cents: i64,
    ) -> Result<(), LedgerError> {
        company.collect(amount_cents, self)
    }

    /// Net cash value held with `company`.
    pub fn cash_value(&self, company: &Company) -> i64 {
        company.cash_value_of(self)
    }

    /// Takes a loan against the available cash value.
    pub fn withdraw(&self, company: &mut Company, amount_cents: i64) -> Result<(), LedgerError> {
        company.loan(amount_cents, self)
    }
}
