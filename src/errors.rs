use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient cash value: requested {requested_cents} with {available_cents} available")]
    InsufficientCashValue {
        requested_cents: i64,
        available_cents: i64,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
