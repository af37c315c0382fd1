//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a purchasing account.
///
/// Always strictly positive; the only way in is through `TryFrom<i64>` or
/// `FromStr`, both of which reject zero and negative numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(DomainError::invalid_id(format!(
                "AccountId must be a positive number (got {value})"
            )));
        }
        Ok(Self(value))
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Self::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_are_accepted() {
        let id = AccountId::try_from(42).unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn zero_and_negative_values_are_rejected() {
        for raw in [0, -1, i64::MIN] {
            match AccountId::try_from(raw) {
                Err(DomainError::InvalidId(msg)) => assert!(msg.contains("positive")),
                other => panic!("expected InvalidId for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_from_text() {
        assert_eq!("7".parse::<AccountId>().unwrap().get(), 7);
        assert!(matches!(
            "seven".parse::<AccountId>(),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!("-3".parse::<AccountId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let id: AccountId = serde_json::from_str("5").unwrap();
        assert_eq!(id.get(), 5);
        assert!(serde_json::from_str::<AccountId>("0").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
