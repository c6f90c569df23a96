use crate::error::OchpResult;
use crate::identifiers::{invalid, OperatorId, OperatorIdFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2})\*?([A-Za-z0-9]{3})\*([A-Za-z0-9\*\-]{1,250})$")
        .expect("static regex")
});

/// Identifier of an OCHPdirect charging session
///
/// Issued by the operator on `SelectEVSE`, format `DE*ABC*<session>`.
/// The session part is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DirectId {
    operator: OperatorId,
    session: String,
}

impl DirectId {
    /// Create a direct session identifier for the given operator
    pub fn new(operator: OperatorId, session: &str) -> OchpResult<Self> {
        if operator.format() != OperatorIdFormat::Iso {
            return Err(invalid("direct id", &format!("{}*{}", operator, session)));
        }
        Self::parse(&format!("{}*{}", operator, session))
    }

    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();
        let caps = PATTERN.captures(text).ok_or_else(|| invalid("direct id", text))?;
        Ok(Self {
            operator: OperatorId::from_parts(&caps[1], &caps[2], OperatorIdFormat::Iso),
            session: caps[3].to_string(),
        })
    }

    pub fn operator_id(&self) -> &OperatorId {
        &self.operator
    }

    pub fn session(&self) -> &str {
        &self.session
    }
}

impl fmt::Display for DirectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.operator, self.session)
    }
}

impl Ord for DirectId {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = |id: &Self| id.operator.canonical_len() + 1 + id.session.len();
        len(self)
            .cmp(&len(other))
            .then_with(|| self.operator.cmp(&other.operator))
            .then_with(|| self.session.cmp(&other.session))
    }
}

identifier_conversions!(DirectId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_session_case() {
        let id = DirectId::parse("de*abc*Session-42a").unwrap();
        assert_eq!(id.operator_id().to_string(), "DE*ABC");
        assert_eq!(id.session(), "Session-42a");
        assert_eq!(id.to_string(), "DE*ABC*Session-42a");
    }

    #[test]
    fn test_requires_separator_before_session() {
        assert!(DirectId::try_parse("DEABC42").is_none());
        assert!(DirectId::try_parse("DEABC*42").is_some());
        assert!(DirectId::parse("").is_err());
    }

    #[test]
    fn test_new() {
        let operator = OperatorId::parse("DE*ABC").unwrap();
        assert_eq!(DirectId::new(operator, "1").unwrap().to_string(), "DE*ABC*1");
        let din = OperatorId::parse("+49*123").unwrap();
        assert!(DirectId::new(din, "1").is_err());
    }
}
