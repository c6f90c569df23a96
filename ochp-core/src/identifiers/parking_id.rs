use crate::error::OchpResult;
use crate::identifiers::{operator_prefixed, OperatorId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2})\*?([A-Za-z0-9]{3})\*?[Pp]([A-Za-z0-9\*]{1,30})$")
        .expect("static regex")
});

/// Parking spot identifier, e.g. `DE*ABC*P12*1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParkingId {
    operator: OperatorId,
    suffix: String,
}

impl ParkingId {
    pub fn parse(text: &str) -> OchpResult<Self> {
        let (operator, suffix) = operator_prefixed(&PATTERN, "parking id", text.trim())?;
        Ok(Self { operator, suffix })
    }

    pub fn operator_id(&self) -> &OperatorId {
        &self.operator
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for ParkingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*P{}", self.operator, self.suffix)
    }
}

impl Ord for ParkingId {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = |id: &Self| id.operator.canonical_len() + 2 + id.suffix.len();
        len(self)
            .cmp(&len(other))
            .then_with(|| self.operator.cmp(&other.operator))
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

identifier_conversions!(ParkingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let id = ParkingId::parse("DE*ABC*P12*1").unwrap();
        assert_eq!(id.suffix(), "12*1");
        assert_eq!(id.to_string(), "DE*ABC*P12*1");
        assert!(ParkingId::try_parse("DE*ABC*E12").is_none());
    }
}
