use crate::error::OchpResult;
use crate::identifiers::invalid;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-]{1,36}$").expect("static regex"));

/// Charge detail record identifier, unique per EVSE
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CdrId(String);

impl CdrId {
    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();
        if !PATTERN.is_match(text) {
            return Err(invalid("CDR id", text));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CdrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for CdrId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

identifier_conversions!(CdrId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(CdrId::parse("cdr-0001").unwrap().as_str(), "cdr-0001");
        assert!(CdrId::parse("").is_err());
        assert!(CdrId::try_parse("has space").is_none());
        assert!(CdrId::try_parse(&"x".repeat(37)).is_none());
    }
}
