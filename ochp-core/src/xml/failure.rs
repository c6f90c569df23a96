//! Parse failure reports

use crate::error::OchpError;
use crate::xml::element_to_string;
use chrono::{DateTime, Utc};
use std::fmt;
use xmltree::Element;

/// A failed attempt to read a value from XML
///
/// Handed to the optional callback of the non-failing `parse` functions.
#[derive(Debug)]
pub struct ParseFailure {
    /// When the failure occurred
    pub timestamp: DateTime<Utc>,
    /// The offending XML, serialized
    pub xml: String,
    pub error: OchpError,
}

impl ParseFailure {
    pub fn new(element: &Element, error: OchpError) -> Self {
        Self {
            timestamp: Utc::now(),
            xml: element_to_string(element),
            error,
        }
    }

    pub fn from_text(text: &str, error: OchpError) -> Self {
        Self {
            timestamp: Utc::now(),
            xml: text.to_string(),
            error,
        }
    }

    /// Log the failure and pass it to `on_failure`, if any
    pub fn report(self, on_failure: Option<&mut dyn FnMut(ParseFailure)>) {
        log::warn!("Failed to parse OCHP element: {} ({})", self.error, self.xml);
        if let Some(callback) = on_failure {
            callback(self);
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.to_rfc3339(), self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::ochp_element;

    #[test]
    fn test_report_invokes_callback() {
        let element = ochp_element("Broken");
        let mut received = Vec::new();
        let mut callback = |failure: ParseFailure| received.push(failure);

        ParseFailure::new(&element, OchpError::MissingElement("Broken/result".into()))
            .report(Some(&mut callback));

        assert_eq!(received.len(), 1);
        assert!(received[0].xml.contains("ns:Broken"));
        assert!(matches!(received[0].error, OchpError::MissingElement(_)));
    }

    #[test]
    fn test_report_without_callback() {
        ParseFailure::from_text("<x", OchpError::Soap("bad".into())).report(None);
    }
}
