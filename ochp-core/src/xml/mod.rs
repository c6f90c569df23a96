//! XML element mapping for OCHP
//!
//! OCHP messages are exchanged as XML elements in the `http://ochp.eu/1.4`
//! namespace. This module provides the building blocks used by every message
//! type:
//!
//! - [`FromXml`] / [`ToXml`]: the read and write halves of a mapped type
//! - [`ElementExt`]: lookup and typed extraction of children and attributes
//! - [`BuildElement`]: fluent construction of OCHP elements
//! - [`ParseFailure`]: the report handed to parse-failure callbacks

use crate::error::OchpResult;
use xmltree::{Element, EmitterConfig, Namespace};

pub mod failure;
pub mod read;
pub mod time;
pub mod write;

pub use failure::ParseFailure;
pub use read::ElementExt;
pub use time::{format_date_time, format_local_date_time, parse_date_time, parse_local_date_time};
pub use write::BuildElement;

/// OCHP v1.4 namespace
pub const OCHP_NS: &str = "http://ochp.eu/1.4";

/// Prefix used for the OCHP namespace in generated documents
pub const OCHP_PREFIX: &str = "ns";

/// Types that can be read from an OCHP element
pub trait FromXml: Sized {
    fn from_xml(element: &Element) -> OchpResult<Self>;
}

/// Types that can be written as an OCHP element
///
/// The element name is chosen by the caller since the same type appears
/// under different names (e.g. `chargePointInfoArray` and
/// `refusedChargePointInfo`).
pub trait ToXml {
    fn to_xml_named(&self, name: &str) -> Element;
}

/// Create an empty element in the OCHP namespace
pub fn ochp_element(name: &str) -> Element {
    let mut namespaces = Namespace::empty();
    namespaces.put(OCHP_PREFIX, OCHP_NS);

    let mut element = Element::new(name);
    element.prefix = Some(OCHP_PREFIX.to_string());
    element.namespace = Some(OCHP_NS.to_string());
    element.namespaces = Some(namespaces);
    element
}

/// `<ns:name>value</ns:name>`
pub fn text_element(name: &str, value: impl ToString) -> Element {
    ochp_element(name).with_text(value)
}

/// `<ns:outer><ns:inner>value</ns:inner></ns:outer>`
///
/// OCHP wraps most enumerations and all date-times this way.
pub fn wrapped_element(outer: &str, inner: &str, value: impl ToString) -> Element {
    ochp_element(outer).with_child(text_element(inner, value))
}

/// Serialize an element without XML declaration, for diagnostics
pub fn element_to_string(element: &Element) -> String {
    let mut buffer = Vec::new();
    let config = EmitterConfig::new().write_document_declaration(false);
    match element.write_with_config(&mut buffer, config) {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => format!("<{}/>", element.name),
    }
}

/// Parse an element from XML text
pub fn parse_element(text: &str) -> OchpResult<Element> {
    Ok(Element::parse(text.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_is_namespaced() {
        let element = text_element("evseId", "DE*ABC*E1");
        assert_eq!(element.name, "evseId");
        assert_eq!(element.namespace.as_deref(), Some(OCHP_NS));
        assert_eq!(element.prefix.as_deref(), Some(OCHP_PREFIX));
    }

    #[test]
    fn test_wrapped_element_serialization() {
        let element = wrapped_element("status", "ChargePointStatusType", "Operative");
        let xml = element_to_string(&element);
        assert!(xml.starts_with("<ns:status xmlns:ns=\"http://ochp.eu/1.4\">"));
        assert!(xml.contains("<ns:ChargePointStatusType>Operative</ns:ChargePointStatusType>"));
    }

    #[test]
    fn test_parse_element_round_trip() {
        let element = ochp_element("GetChargePointListRequest");
        let parsed = parse_element(&element_to_string(&element)).unwrap();
        assert!(parsed.is_ochp("GetChargePointListRequest"));
        assert!(parse_element("<unclosed>").is_err());
    }
}
