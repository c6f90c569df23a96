//! SOAP 1.1 faults

use crate::envelope::soap_element;
use ochp_core::{BuildElement, OchpError, OchpResult};
use std::fmt;
use xmltree::Element;

/// `faultcode` for errors caused by the request
pub const CLIENT: &str = "soapenv:Client";
/// `faultcode` for errors on the receiving side
pub const SERVER: &str = "soapenv:Server";

fn plain_child<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .find(|child| child.name == name)
}

fn plain_text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Transport-level error returned instead of a response message
///
/// Business errors are reported through the result block of the response;
/// a fault means the request could not be processed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    pub code: String,
    pub message: String,
    pub detail: Option<String>,
}

impl SoapFault {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::new(CLIENT, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(SERVER, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Whether a body entry is a fault
    pub fn is_fault(element: &Element) -> bool {
        element.name == "Fault"
            && element.namespace.as_deref() == Some(crate::envelope::SOAP_ENV_NS)
    }

    /// Map a decoding error to the fault a server should answer with
    pub fn from_error(error: &OchpError) -> Self {
        match error {
            OchpError::XmlWrite(_) => Self::server(error.to_string()),
            OchpError::Fault { code, message } => Self::new(code.clone(), message.clone()),
            _ => Self::client(error.to_string()),
        }
    }

    pub fn to_element(&self) -> Element {
        let mut fault = soap_element("Fault")
            .with_child(Element::new("faultcode").with_text(&self.code))
            .with_child(Element::new("faultstring").with_text(&self.message));
        if let Some(detail) = &self.detail {
            fault = fault.with_child(Element::new("detail").with_text(detail));
        }
        fault
    }

    pub fn from_element(element: &Element) -> OchpResult<Self> {
        if !Self::is_fault(element) {
            return Err(OchpError::UnexpectedElement {
                expected: "Fault".to_string(),
                actual: element.name.clone(),
            });
        }
        let required = |name: &str| {
            plain_child(element, name)
                .map(plain_text)
                .ok_or_else(|| OchpError::MissingElement(format!("Fault/{}", name)))
        };

        Ok(Self {
            code: required("faultcode")?,
            message: required("faultstring")?,
            detail: plain_child(element, "detail")
                .map(plain_text)
                .filter(|detail| !detail.is_empty()),
        })
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<SoapFault> for OchpError {
    fn from(fault: SoapFault) -> Self {
        OchpError::Fault {
            code: fault.code,
            message: fault.message,
        }
    }
}
