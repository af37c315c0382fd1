//! Aggregation pass over a purchase's ticket requests.

use crate::error::InvalidPurchase;
use crate::ticket::{TicketType, TicketTypeRequest};

/// Most tickets a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 25;

/// Totals computed for one purchase.
///
/// Only ever produced by [`PurchaseTotals::tally`], so an instance always
/// satisfies the purchase rules (ticket cap, adult present, one lap per infant).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PurchaseTotals {
    pub total_tickets: u64,
    /// Whole pounds.
    pub total_cost: u64,
    pub total_seats: u64,
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl PurchaseTotals {
    /// Validate and aggregate a caller-assembled request list.
    ///
    /// Rejects an empty list and any missing slot before looking at the
    /// rules that depend on the totals.
    pub fn tally(requests: &[Option<TicketTypeRequest>]) -> Result<Self, InvalidPurchase> {
        Self::accumulate(requests.iter().map(Option::as_ref))
    }

    /// Same as [`tally`](Self::tally) for a list that cannot contain gaps.
    pub fn tally_requests(requests: &[TicketTypeRequest]) -> Result<Self, InvalidPurchase> {
        Self::accumulate(requests.iter().map(Some))
    }

    fn accumulate<'a, I>(requests: I) -> Result<Self, InvalidPurchase>
    where
        I: ExactSizeIterator<Item = Option<&'a TicketTypeRequest>>,
    {
        if requests.len() == 0 {
            return Err(InvalidPurchase::NoTicketRequests);
        }

        let mut totals = PurchaseTotals::default();
        for (index, request) in requests.enumerate() {
            let request = request.ok_or(InvalidPurchase::MissingTicketRequest { index })?;
            totals.add(request);
        }

        totals.check_ticket_cap()?;
        totals.check_adult_cover()?;
        Ok(totals)
    }

    fn add(&mut self, request: &TicketTypeRequest) {
        let quantity = u64::from(request.quantity());
        let tariff = request.ticket_type().tariff();

        self.total_tickets = self.total_tickets.saturating_add(quantity);
        self.total_cost = self
            .total_cost
            .saturating_add(tariff.price.saturating_mul(quantity));
        if tariff.requires_seat {
            self.total_seats = self.total_seats.saturating_add(quantity);
        }

        let count = match request.ticket_type() {
            TicketType::Adult => &mut self.adults,
            TicketType::Child => &mut self.children,
            TicketType::Infant => &mut self.infants,
        };
        *count = count.saturating_add(quantity);
    }

    fn check_ticket_cap(&self) -> Result<(), InvalidPurchase> {
        if self.total_tickets > MAX_TICKETS_PER_PURCHASE {
            return Err(InvalidPurchase::TooManyTickets {
                requested: self.total_tickets,
                maximum: MAX_TICKETS_PER_PURCHASE,
            });
        }
        Ok(())
    }

    // Zero adults fails even when nothing else was requested.
    fn check_adult_cover(&self) -> Result<(), InvalidPurchase> {
        if self.adults == 0 {
            return Err(InvalidPurchase::AdultRequired);
        }
        if self.infants > self.adults {
            return Err(InvalidPurchase::InfantsExceedAdults {
                infants: self.infants,
                adults: self.adults,
            });
        }
        Ok(())
    }
}
