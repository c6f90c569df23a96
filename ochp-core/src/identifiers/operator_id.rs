use crate::error::OchpResult;
use crate::identifiers::invalid;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static ISO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{2})\*?([A-Za-z0-9]{3})$").expect("static regex"));

static DIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?([0-9]{1,3})\*([0-9]{3})$").expect("static regex"));

/// Text format an operator identifier was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperatorIdFormat {
    /// ISO/eMI3 form: two letter country code and three alphanumerics, e.g. `DE*ABC`
    Iso,
    /// DIN SPEC 91286 form: telephone country code and three digits, e.g. `+49*123`
    Din,
}

/// Charging station operator identifier
///
/// Serves as the prefix of EVSE, parking, tariff and direct session
/// identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperatorId {
    country_code: String,
    suffix: String,
    format: OperatorIdFormat,
}

impl OperatorId {
    pub(crate) fn from_parts(country_code: &str, suffix: &str, format: OperatorIdFormat) -> Self {
        Self {
            country_code: country_code.to_ascii_uppercase(),
            suffix: suffix.to_ascii_uppercase(),
            format,
        }
    }

    /// Parse an operator identifier in ISO (`DE*ABC`, `DEABC`) or DIN (`+49*123`) form
    pub fn parse(text: &str) -> OchpResult<Self> {
        let text = text.trim();

        if let Some(caps) = ISO_PATTERN.captures(text) {
            return Ok(Self::from_parts(&caps[1], &caps[2], OperatorIdFormat::Iso));
        }

        if let Some(caps) = DIN_PATTERN.captures(text) {
            return Ok(Self::from_parts(&caps[1], &caps[2], OperatorIdFormat::Din));
        }

        Err(invalid("operator id", text))
    }

    /// Country code (letters for ISO, digits for DIN)
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The three character operator suffix
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn format(&self) -> OperatorIdFormat {
        self.format
    }

    /// Length of the canonical text form
    pub fn canonical_len(&self) -> usize {
        match self.format {
            OperatorIdFormat::Iso => self.country_code.len() + 1 + self.suffix.len(),
            OperatorIdFormat::Din => 1 + self.country_code.len() + 1 + self.suffix.len(),
        }
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OperatorIdFormat::Iso => write!(f, "{}*{}", self.country_code, self.suffix),
            OperatorIdFormat::Din => write!(f, "+{}*{}", self.country_code, self.suffix),
        }
    }
}

impl Ord for OperatorId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_len()
            .cmp(&other.canonical_len())
            .then_with(|| self.country_code.cmp(&other.country_code))
            .then_with(|| self.suffix.cmp(&other.suffix))
            .then_with(|| self.format.cmp(&other.format))
    }
}

identifier_conversions!(OperatorId);
