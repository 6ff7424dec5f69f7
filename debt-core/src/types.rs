//! Core types for debt simplification
//!
//! All types are designed for:
//! - Deterministic ordering (lexicographic participant ids)
//! - Exact arithmetic (Decimal for money)

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Participant identifier (person, account, alias-resolved name)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Create new participant
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Participant {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Participant {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&Participant> for Participant {
    fn from(id: &Participant) -> Self {
        id.clone()
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reject negative amounts.
pub fn ensure_amount(amount: Decimal) -> Result<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::InvalidAmount(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse a textual amount (`"12.50"`, `"1e3"`), rejecting non-numeric input
/// and negatives.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let text = text.trim();
    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::InvalidAmount(format!("not a number: {:?}", text)))?;
    ensure_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_participant_ordering() {
        let mut ids = vec![Participant::new("carol"), Participant::new("alice"), "bob".into()];
        ids.sort();

        let names: Vec<&str> = ids.iter().map(Participant::as_str).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_participant_display() {
        let id = Participant::from(String::from("alice"));
        assert_eq!(id.to_string(), "alice");
        assert_eq!(id, Participant::from(&id));
    }

    #[test]
    fn test_ensure_amount() {
        assert_eq!(ensure_amount(dec!(10.5)).unwrap(), dec!(10.5));
        assert_eq!(ensure_amount(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert!(matches!(ensure_amount(dec!(-0.01)), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount(" 7 ").unwrap(), dec!(7));
        assert_eq!(parse_amount("1e3").unwrap(), dec!(1000));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("-3").is_err());
    }
}
