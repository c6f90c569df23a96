//! Identifier value types for OCHP
//!
//! Every identifier wraps a validated string. Parsing is done with a fixed
//! regular expression per identifier kind; the canonical text form upper-cases
//! country and operator codes and always uses `*` as separator.
//!
//! All identifiers offer the same contract:
//! - `parse(text)` returns `Err(OchpError::InvalidIdentifier)` for malformed input
//! - `try_parse(text)` returns `None` instead
//! - `Display` writes the canonical form, which parses back to an equal value
//! - ordering compares the canonical length first, then the operator or
//!   provider prefix, then the suffix

use crate::error::{OchpError, OchpResult};
use regex::Regex;

pub(crate) fn invalid(kind: &'static str, text: &str) -> OchpError {
    OchpError::InvalidIdentifier {
        kind,
        value: text.to_string(),
    }
}

/// Match `text` against an ISO pattern capturing (country, operator suffix, id suffix)
pub(crate) fn operator_prefixed(
    pattern: &Regex,
    kind: &'static str,
    text: &str,
) -> OchpResult<(OperatorId, String)> {
    let caps = pattern.captures(text).ok_or_else(|| invalid(kind, text))?;
    let operator = OperatorId::from_parts(&caps[1], &caps[2], OperatorIdFormat::Iso);
    Ok((operator, caps[3].to_ascii_uppercase()))
}

/// Implements the string conversions shared by every identifier type.
///
/// The type must provide `parse(&str) -> OchpResult<Self>`, `Display` and `Ord`.
/// Defined above the module declarations so it is in textual scope for them.
macro_rules! identifier_conversions {
    ($ty:ty) => {
        impl $ty {
            /// Parse the given text, returning `None` if it is malformed
            pub fn try_parse(text: &str) -> Option<Self> {
                Self::parse(text).ok()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::OchpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::error::OchpError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

pub mod cdr_id;
pub mod contract_id;
pub mod direct_id;
pub mod evse_id;
pub mod operator_id;
pub mod parking_id;
pub mod provider_id;
pub mod tariff_id;

pub use cdr_id::CdrId;
pub use contract_id::ContractId;
pub use direct_id::DirectId;
pub use evse_id::EvseId;
pub use operator_id::{OperatorId, OperatorIdFormat};
pub use parking_id::ParkingId;
pub use provider_id::ProviderId;
pub use tariff_id::TariffId;
