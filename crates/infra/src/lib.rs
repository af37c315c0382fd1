//! Infrastructure layer: adapters for the external ticketing collaborators.

pub mod payment;
pub mod reservation;

pub use payment::{InMemoryPaymentGateway, Payment};
pub use reservation::{InMemorySeatReservation, Reservation};

use thiserror::Error;

/// Failure raised by the in-memory adapters.
///
/// Real gateways have their own error taxonomy; these exist so tests can make a
/// collaborator fail and watch the error come back out of a purchase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("{0}")]
    Rejected(String),

    #[error("adapter state unavailable: lock poisoned")]
    Poisoned,
}
