//! Purchase entry point: validate, aggregate, then pay and reserve.
//!
//! ```text
//! account id ─► request list ─► per-item ─► tally ─► ticket cap ─► adult cover
//!                                                                     │
//!                                   make_payment ◄────────────────────┘
//!                                        │
//!                                   reserve_seat
//! ```
//!
//! Every rule runs before the first collaborator call, so a rejected purchase
//! has no side effects.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use boxoffice_core::AccountId;

use crate::error::{InvalidPurchase, PurchaseError};
use crate::gateway::{SeatReservationService, TicketPaymentService};
use crate::ticket::TicketTypeRequest;
use crate::totals::PurchaseTotals;

/// Purchase as a transport layer assembles it.
///
/// Any part may be missing; [`TicketService::purchase`] turns each gap into the
/// matching [`InvalidPurchase`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseInput {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub requests: Option<Vec<Option<TicketTypeRequest>>>,
}

/// Ticket purchasing service.
///
/// Holds its payment and reservation collaborators for its whole lifetime and
/// keeps no other state; each purchase is independent.
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    payments: P,
    reservations: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new(payments: P, reservations: R) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    pub fn into_parts(self) -> (P, R) {
        (self.payments, self.reservations)
    }

    /// Purchase tickets for `account_id`.
    ///
    /// On success the payment service has been charged the total cost and the
    /// reservation service asked for the total seats, in that order.
    #[instrument(skip_all, fields(account_id = ?account_id, requests = requests.len()))]
    pub fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[Option<TicketTypeRequest>],
    ) -> Result<(), PurchaseError> {
        let (account_id, totals) = validate(account_id, requests).inspect_err(|reason| {
            warn!(%reason, "purchase rejected");
        })?;

        debug!(
            total_tickets = totals.total_tickets,
            adults = totals.adults,
            children = totals.children,
            infants = totals.infants,
            "purchase validated"
        );

        self.settle(account_id, &totals)
    }

    /// Purchase from transport-shaped input, where the request list itself may
    /// be absent.
    pub fn purchase(&self, input: &PurchaseInput) -> Result<(), PurchaseError> {
        match &input.requests {
            Some(requests) => self.purchase_tickets(input.account_id, requests),
            None => {
                // Account problems are reported ahead of list problems.
                let reason = account(input.account_id)
                    .err()
                    .unwrap_or(InvalidPurchase::NoTicketRequests);
                warn!(%reason, account_id = ?input.account_id, "purchase rejected");
                Err(reason.into())
            }
        }
    }

    fn settle(&self, account_id: AccountId, totals: &PurchaseTotals) -> Result<(), PurchaseError> {
        self.payments
            .make_payment(account_id, totals.total_cost)
            .map_err(|e| {
                error!(error = %e, %account_id, amount = totals.total_cost, "payment failed");
                PurchaseError::Payment(e)
            })?;

        self.reservations
            .reserve_seat(account_id, totals.total_seats)
            .map_err(|e| {
                error!(error = %e, %account_id, seats = totals.total_seats, "seat reservation failed");
                PurchaseError::Reservation(e)
            })?;

        info!(
            %account_id,
            amount = totals.total_cost,
            seats = totals.total_seats,
            "tickets purchased"
        );
        Ok(())
    }
}

fn account(account_id: Option<i64>) -> Result<AccountId, InvalidPurchase> {
    account_id
        .and_then(|raw| AccountId::try_from(raw).ok())
        .ok_or(InvalidPurchase::InvalidAccount)
}

fn validate(
    account_id: Option<i64>,
    requests: &[Option<TicketTypeRequest>],
) -> Result<(AccountId, PurchaseTotals), InvalidPurchase> {
    let account_id = account(account_id)?;
    let totals = PurchaseTotals::tally(requests)?;
    Ok((account_id, totals))
}
