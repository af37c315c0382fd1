use core::str::FromStr;
use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, DomainResult, ValueObject};

/// Ticket category.
///
/// Serialized in upper case (`"ADULT"`); parsing accepts any case.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// Price and seat rule for one ticket category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tariff {
    /// Price per ticket in whole pounds.
    pub price: u64,
    /// Whether the ticket occupies a reservable seat (infants sit on a lap).
    pub requires_seat: bool,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Lookup table for the fixed pricing tiers.
    pub const fn tariff(self) -> Tariff {
        match self {
            TicketType::Adult => Tariff {
                price: 25,
                requires_seat: true,
            },
            TicketType::Child => Tariff {
                price: 15,
                requires_seat: true,
            },
            TicketType::Infant => Tariff {
                price: 0,
                requires_seat: false,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown ticket type: {s:?}")))
    }
}

impl TryFrom<String> for TicketType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketType> for &'static str {
    fn from(value: TicketType) -> Self {
        value.as_str()
    }
}

/// Request for `quantity` tickets of one category.
///
/// Immutable; the constructor is the only way to build one, so every instance
/// has a strictly positive quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketTypeRequest", into = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl ValueObject for TicketTypeRequest {}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "each ticket request must have at least 1 ticket",
            ));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            DomainError::invalid_argument(format!("ticket quantity {quantity} is out of range"))
        })?;

        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Wire shape of a ticket request; `type` may be missing on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTicketTypeRequest {
    #[serde(rename = "type", default)]
    ticket_type: Option<TicketType>,
    quantity: i64,
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = DomainError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        let ticket_type = raw
            .ticket_type
            .ok_or_else(|| DomainError::invalid_argument("ticket type cannot be null"))?;
        TicketTypeRequest::new(ticket_type, raw.quantity)
    }
}

impl From<TicketTypeRequest> for RawTicketTypeRequest {
    fn from(value: TicketTypeRequest) -> Self {
        Self {
            ticket_type: Some(value.ticket_type),
            quantity: i64::from(value.quantity),
        }
    }
}
