use std::sync::RwLock;

use tracing::info;

use boxoffice_core::AccountId;
use boxoffice_ticketing::TicketPaymentService;

use crate::AdapterError;

/// A payment taken by [`InMemoryPaymentGateway`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u64,
}

/// In-memory payment gateway.
///
/// Intended for tests/dev. Records every successful payment in call order.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    payments: RwLock<Vec<Payment>>,
    decline_with: Option<String>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every payment with `reason`.
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            payments: RwLock::default(),
            decline_with: Some(reason.into()),
        }
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments
            .read()
            .map(|payments| payments.clone())
            .unwrap_or_default()
    }
}

impl TicketPaymentService for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        if let Some(reason) = &self.decline_with {
            return Err(AdapterError::Rejected(reason.clone()).into());
        }

        self.payments
            .write()
            .map_err(|_| AdapterError::Poisoned)?
            .push(Payment { account_id, amount });

        info!(%account_id, amount, "payment taken");
        Ok(())
    }
}
