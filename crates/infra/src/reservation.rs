use std::sync::RwLock;

use tracing::info;

use boxoffice_core::AccountId;
use boxoffice_ticketing::SeatReservationService;

use crate::AdapterError;

/// A seat reservation made by [`InMemorySeatReservation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seat_count: u64,
}

/// In-memory seat reservation service.
///
/// Intended for tests/dev. No seat inventory is tracked; every request is
/// accepted unless the service was built with [`refusing`](Self::refusing).
#[derive(Debug, Default)]
pub struct InMemorySeatReservation {
    reservations: RwLock<Vec<Reservation>>,
    refuse_with: Option<String>,
}

impl InMemorySeatReservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing(reason: impl Into<String>) -> Self {
        Self {
            reservations: RwLock::default(),
            refuse_with: Some(reason.into()),
        }
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations
            .read()
            .map(|reservations| reservations.clone())
            .unwrap_or_default()
    }

    pub fn seats_reserved(&self, account_id: AccountId) -> u64 {
        self.reservations()
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| r.seat_count)
            .sum()
    }
}

impl SeatReservationService for InMemorySeatReservation {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> anyhow::Result<()> {
        if let Some(reason) = &self.refuse_with {
            return Err(AdapterError::Rejected(reason.clone()).into());
        }

        self.reservations
            .write()
            .map_err(|_| AdapterError::Poisoned)?
            .push(Reservation {
                account_id,
                seat_count,
            });

        info!(%account_id, seat_count, "seats reserved");
        Ok(())
    }
}
