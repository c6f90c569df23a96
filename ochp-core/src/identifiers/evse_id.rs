use crate::error::OchpResult;
use crate::identifiers::{invalid, operator_prefixed, OperatorId, OperatorIdFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static ISO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2})\*?([A-Za-z0-9]{3})\*?[Ee]([A-Za-z0-9\*]{1,30})$")
        .expect("static regex")
});

static DIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?([0-9]{1,3})\*([0-9]{3})\*([0-9\*]{1,32})$").expect("static regex")
});

/// Electric vehicle supply equipment identifier
///
/// ISO form: `DE*ABC*E123456*1` (the `E` marks the EVSE part).
/// DIN form: `+49*810*000*438`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EvseId {
    operator: OperatorId,
    suffix: String,
}

impl EvseId {
    /// Create an EVSE identifier from its operator and suffix
    pub fn new(operator: OperatorId, suffix: &str) -> OchpResult<Self> {
        let text = match operator.format() {
            OperatorIdFormat::Iso => format!("{}*E{}", operator, suffix),
            OperatorIdFormat::Din => format!("{}*{}", operator, suffix),
        };
        Self::parse(&text)
    }

    /// Parse an EVSE identifier
    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();

        if let Ok((operator, suffix)) = operator_prefixed(&ISO_PATTERN, "EVSE id", text) {
            return Ok(Self { operator, suffix });
        }

        if let Some(caps) = DIN_PATTERN.captures(text) {
            return Ok(Self {
                operator: OperatorId::from_parts(&caps[1], &caps[2], OperatorIdFormat::Din),
                suffix: caps[3].to_string(),
            });
        }

        Err(invalid("EVSE id", text))
    }

    pub fn operator_id(&self) -> &OperatorId {
        &self.operator
    }

    /// The part after the operator prefix (without the `E` marker)
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn canonical_len(&self) -> usize {
        match self.operator.format() {
            OperatorIdFormat::Iso => self.operator.canonical_len() + 2 + self.suffix.len(),
            OperatorIdFormat::Din => self.operator.canonical_len() + 1 + self.suffix.len(),
        }
    }
}

impl fmt::Display for EvseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator.format() {
            OperatorIdFormat::Iso => write!(f, "{}*E{}", self.operator, self.suffix),
            OperatorIdFormat::Din => write!(f, "{}*{}", self.operator, self.suffix),
        }
    }
}

impl Ord for EvseId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_len()
            .cmp(&other.canonical_len())
            .then_with(|| self.operator.cmp(&other.operator))
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

identifier_conversions!(EvseId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        let id = EvseId::parse("DE*GEF*E123456789*1").unwrap();
        assert_eq!(id.operator_id().to_string(), "DE*GEF");
        assert_eq!(id.suffix(), "123456789*1");
        assert_eq!(id.to_string(), "DE*GEF*E123456789*1");
    }

    #[test]
    fn test_parse_iso_compact_is_canonicalized() {
        let id = EvseId::parse("degefe1234").unwrap();
        assert_eq!(id.to_string(), "DE*GEF*E1234");
        assert_eq!(EvseId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_din() {
        let id = EvseId::parse("+49*810*000*438").unwrap();
        assert_eq!(id.operator_id().format(), OperatorIdFormat::Din);
        assert_eq!(id.to_string(), "+49*810*000*438");
    }

    #[test]
    fn test_new_from_operator() {
        let operator = OperatorId::parse("DE*ABC").unwrap();
        let id = EvseId::new(operator, "42").unwrap();
        assert_eq!(id.to_string(), "DE*ABC*E42");
        assert!(EvseId::new(OperatorId::parse("DE*ABC").unwrap(), "").is_err());
    }

    #[test]
    fn test_string_conversions() {
        let id: EvseId = "DE*ABC*E1".parse().unwrap();
        assert_eq!(EvseId::try_from("DE*ABC*E1".to_string()).unwrap(), id);
        assert_eq!(String::from(id.clone()), "DE*ABC*E1");
        assert_eq!(EvseId::try_parse("DE*ABC"), None);
        assert!(id < EvseId::parse("DE*ABC*E2").unwrap());
    }

    #[test]
    fn test_malformed() {
        assert!(EvseId::parse("").is_err());
        assert!(EvseId::try_parse("DE*ABC*X123").is_none());
        assert!(EvseId::try_parse("DE*ABC*E").is_none());
    }

    #[test]
    fn test_ordering() {
        let a = EvseId::parse("DE*ABC*E1").unwrap();
        let b = EvseId::parse("DE*ABC*E2").unwrap();
        let c = EvseId::parse("AA*AAA*E10").unwrap();
        let mut ids = vec![c.clone(), b.clone(), a.clone()];
        ids.sort();
        assert_eq!(ids, vec![a, b, c]);
    }
}
