use std::fmt;

use thiserror::Error;

use crate::domain::Cents;

/// Which account a validation failure is about. Single-account operations
/// (balance, deposit, withdraw) use `Sole`; transfer distinguishes the two
/// legs so callers can tell which side failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Source,
    Destination,
    Sole,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Source => write!(f, "source account"),
            AccountRole::Destination => write!(f, "destination account"),
            AccountRole::Sole => write!(f, "account"),
        }
    }
}

/// Ledger operation failures. Raised at the point of detection and
/// propagated unmodified; there is no retry inside the service.
///
/// Not-found and inactive carry only the role, never the identifier, so the
/// message for a given failure is the same whatever id was asked for.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    AccountNotFound(AccountRole),

    #[error("{0} is inactive")]
    AccountInactive(AccountRole),

    #[error("insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Cents, required: Cents },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
