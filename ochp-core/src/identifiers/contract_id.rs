use crate::error::OchpResult;
use crate::identifiers::{invalid, ProviderId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2})[\*\-]?([A-Za-z0-9]{3})[\*\-]?([A-Za-z0-9]{9})(?:[\*\-]?([A-Za-z0-9]))?$")
        .expect("static regex")
});

/// E-mobility account identifier (EMA-ID / contract id)
///
/// Format: provider prefix, nine character instance and an optional check
/// character, e.g. `DE*8PS*C12345678*X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractId {
    provider: ProviderId,
    instance: String,
    check: Option<char>,
}

impl ContractId {
    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();
        let caps = PATTERN.captures(text).ok_or_else(|| invalid("contract id", text))?;
        Ok(Self {
            provider: ProviderId::from_parts(&caps[1], &caps[2]),
            instance: caps[3].to_ascii_uppercase(),
            check: caps
                .get(4)
                .and_then(|m| m.as_str().chars().next())
                .map(|c| c.to_ascii_uppercase()),
        })
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn check_char(&self) -> Option<char> {
        self.check
    }

    fn canonical_len(&self) -> usize {
        6 + 1 + self.instance.len() + self.check.map_or(0, |_| 2)
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.provider, self.instance)?;
        if let Some(check) = self.check {
            write!(f, "*{}", check)?;
        }
        Ok(())
    }
}

impl Ord for ContractId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_len()
            .cmp(&other.canonical_len())
            .then_with(|| self.provider.cmp(&other.provider))
            .then_with(|| self.instance.cmp(&other.instance))
            .then_with(|| self.check.cmp(&other.check))
    }
}

identifier_conversions!(ContractId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_check_char() {
        let id = ContractId::parse("DE-8PS-C12345678-x").unwrap();
        assert_eq!(id.provider_id().to_string(), "DE*8PS");
        assert_eq!(id.instance(), "C12345678");
        assert_eq!(id.check_char(), Some('X'));
        assert_eq!(id.to_string(), "DE*8PS*C12345678*X");
    }

    #[test]
    fn test_parse_without_check_char() {
        let id = ContractId::parse("DE8PSC12345678").unwrap();
        assert_eq!(id.check_char(), None);
        assert_eq!(ContractId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_malformed() {
        assert!(ContractId::parse("DE*8PS*123").is_err());
        assert!(ContractId::try_parse("").is_none());
    }

    #[test]
    fn test_ordering_prefers_shorter() {
        let short = ContractId::parse("ZZ*ZZZ*ZZZZZZZZZ").unwrap();
        let long = ContractId::parse("AA*AAA*AAAAAAAAA*1").unwrap();
        assert!(short < long);
    }
}
