//! External collaborator boundary (payment and seat reservation).
//!
//! Both services are opaque: this crate calls them once per successful purchase
//! and passes their errors back to the caller untouched.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Takes payment for a purchase.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` (whole pounds) to the account.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for the account.
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> anyhow::Result<()>;
}

impl<S> TicketPaymentService for Arc<S>
where
    S: TicketPaymentService + ?Sized,
{
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount)
    }
}

impl<S> TicketPaymentService for &S
where
    S: TicketPaymentService + ?Sized,
{
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount)
    }
}

impl<S> SeatReservationService for Arc<S>
where
    S: SeatReservationService + ?Sized,
{
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<S> SeatReservationService for &S
where
    S: SeatReservationService + ?Sized,
{
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, seat_count)
    }
}
