use crate::error::OchpResult;
use crate::identifiers::invalid;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{2})[\*\-]?([A-Za-z0-9]{3})$").expect("static regex"));

/// E-mobility provider identifier, e.g. `DE*8PS`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId {
    country_code: String,
    suffix: String,
}

impl ProviderId {
    pub(crate) fn from_parts(country_code: &str, suffix: &str) -> Self {
        Self {
            country_code: country_code.to_ascii_uppercase(),
            suffix: suffix.to_ascii_uppercase(),
        }
    }

    /// Parse a provider identifier; `*`, `-` or no separator are accepted
    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();
        let caps = PATTERN.captures(text).ok_or_else(|| invalid("provider id", text))?;
        Ok(Self::from_parts(&caps[1], &caps[2]))
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.country_code, self.suffix)
    }
}

impl Ord for ProviderId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.country_code
            .cmp(&other.country_code)
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

identifier_conversions!(ProviderId);
