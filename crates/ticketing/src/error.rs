//! Purchase error model.

use thiserror::Error;

/// A purchase broke one of the ticketing rules.
///
/// Every variant is the same kind of failure ("the request was invalid"); the
/// variants only exist so each rule reports its own message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    #[error("account id must be a positive number")]
    InvalidAccount,

    #[error("ticket request list cannot be null or empty")]
    NoTicketRequests,

    #[error("individual ticket request cannot be null (index {index})")]
    MissingTicketRequest { index: usize },

    #[error("you cannot purchase more than {maximum} tickets at a time (requested {requested})")]
    TooManyTickets { requested: u64, maximum: u64 },

    #[error("child and infant tickets cannot be purchased without an adult ticket")]
    AdultRequired,

    #[error("each infant must have an accompanying adult lap ({infants} infants, {adults} adults)")]
    InfantsExceedAdults { infants: u64, adults: u64 },
}

/// Failure of `TicketService::purchase_tickets`.
///
/// Collaborator failures are carried transparently: their message and source
/// chain are the collaborator's own.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("invalid purchase: {0}")]
    InvalidPurchase(#[from] InvalidPurchase),

    #[error(transparent)]
    Payment(anyhow::Error),

    #[error(transparent)]
    Reservation(anyhow::Error),
}

impl PurchaseError {
    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, PurchaseError::InvalidPurchase(_))
    }

    /// The rule that rejected the purchase, if validation failed.
    pub fn invalid_purchase(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::InvalidPurchase(reason) => Some(reason),
            _ => None,
        }
    }
}
