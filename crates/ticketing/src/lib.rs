//! Ticketing domain module (purchase validation and aggregation).
//!
//! This crate contains the business rules for buying venue tickets, implemented
//! as deterministic domain logic. Payment and seat reservation are external
//! collaborators reached only through the traits in [`gateway`].

pub mod error;
pub mod gateway;
pub mod service;
pub mod ticket;
pub mod totals;

pub use error::{InvalidPurchase, PurchaseError};
pub use gateway::{SeatReservationService, TicketPaymentService};
pub use service::{PurchaseInput, TicketService};
pub use ticket::{Tariff, TicketType, TicketTypeRequest};
pub use totals::{MAX_TICKETS_PER_PURCHASE, PurchaseTotals};
