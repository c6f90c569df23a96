use crate::error::OchpResult;
use crate::identifiers::{operator_prefixed, OperatorId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2})\*?([A-Za-z0-9]{3})\*?[Tt]([A-Za-z0-9\*]{1,30})$")
        .expect("static regex")
});

/// Tariff identifier, unique within the scope of an operator
///
/// Format: `DE*ABC*T1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TariffId {
    operator: OperatorId,
    suffix: String,
}

impl TariffId {
    /// Create a tariff identifier from its operator and suffix
    pub fn new(operator: OperatorId, suffix: &str) -> OchpResult<Self> {
        Self::parse(&format!("{}*T{}", operator, suffix))
    }

    /// Parse a tariff identifier
    pub fn parse(text: &str) -> OchpResult<Self> {
        let (operator, suffix) = operator_prefixed(&PATTERN, "tariff id", text.trim())?;
        Ok(Self { operator, suffix })
    }

    pub fn operator_id(&self) -> &OperatorId {
        &self.operator
    }

    /// The part after the `T` marker
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn canonical_len(&self) -> usize {
        self.operator.canonical_len() + 2 + self.suffix.len()
    }
}

impl fmt::Display for TariffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*T{}", self.operator, self.suffix)
    }
}

impl Ord for TariffId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_len()
            .cmp(&other.canonical_len())
            .then_with(|| self.operator.cmp(&other.operator))
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

identifier_conversions!(TariffId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let id = TariffId::parse("DE*ABC*T1234").unwrap();
        assert_eq!(id.operator_id().to_string(), "DE*ABC");
        assert_eq!(id.suffix(), "1234");
        assert_eq!(id.to_string(), "DE*ABC*T1234");
    }

    #[test]
    fn test_round_trip() {
        for text in ["DE*ABC*T1234", "deabct1", "FR*X1Y*TA*B*C"] {
            let id = TariffId::parse(text).unwrap();
            assert_eq!(TariffId::parse(&id.to_string()).unwrap(), id);
        }
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(TariffId::parse("").is_err());
        assert!(TariffId::try_parse("").is_none());
        assert!(TariffId::try_parse("DE*ABC*E1234").is_none());
    }

    #[test]
    fn test_serde_as_string() {
        let id = TariffId::parse("DE*ABC*T1234").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DE*ABC*T1234\"");
        let back: TariffId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<TariffId>("\"nope\"").is_err());
    }
}
