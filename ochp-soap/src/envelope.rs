//! SOAP 1.1 envelope

use crate::fault::SoapFault;
use crate::security::UsernameToken;
use ochp_core::xml::{OCHP_NS, OCHP_PREFIX};
use ochp_core::{BuildElement, OchpError, OchpResult};
use xmltree::{Element, Namespace};

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_ENV_PREFIX: &str = "soapenv";

/// Create an empty element in the SOAP envelope namespace
pub fn soap_element(name: &str) -> Element {
    let mut namespaces = Namespace::empty();
    namespaces.put(SOAP_ENV_PREFIX, SOAP_ENV_NS);

    let mut element = Element::new(name);
    element.prefix = Some(SOAP_ENV_PREFIX.to_string());
    element.namespace = Some(SOAP_ENV_NS.to_string());
    element.namespaces = Some(namespaces);
    element
}

fn soap_children<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |child| child.name == name && child.namespace.as_deref() == Some(SOAP_ENV_NS))
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| node.as_element())
}

/// A SOAP envelope with header entries and a single body entry
#[derive(Debug, Clone, PartialEq)]
pub struct SoapEnvelope {
    pub header: Vec<Element>,
    pub body: Element,
}

impl SoapEnvelope {
    pub fn new(body: Element) -> Self {
        Self {
            header: Vec::new(),
            body,
        }
    }

    pub fn fault(fault: &SoapFault) -> Self {
        Self::new(fault.to_element())
    }

    pub fn with_header_entry(mut self, entry: Element) -> Self {
        self.header.push(entry);
        self
    }

    pub fn with_credentials(self, credentials: &UsernameToken) -> Self {
        self.with_header_entry(credentials.to_header())
    }

    /// Credentials from the WS-Security header, if present
    pub fn credentials(&self) -> OchpResult<Option<UsernameToken>> {
        self.header
            .iter()
            .find(|entry| UsernameToken::is_security_header(entry))
            .map(UsernameToken::from_header)
            .transpose()
    }

    pub fn is_fault(&self) -> bool {
        SoapFault::is_fault(&self.body)
    }

    /// The body entry, or the fault it carries as an error
    pub fn into_body(self) -> OchpResult<Element> {
        if self.is_fault() {
            let fault = SoapFault::from_element(&self.body)?;
            log::warn!("Received SOAP fault: {}", fault);
            return Err(fault.into());
        }
        Ok(self.body)
    }

    pub fn to_element(&self) -> Element {
        let mut envelope = soap_element("Envelope");
        if let Some(namespaces) = envelope.namespaces.as_mut() {
            namespaces.put(OCHP_PREFIX, OCHP_NS);
        }

        let mut header = soap_element("Header");
        header.children.extend(
            self.header
                .iter()
                .cloned()
                .map(xmltree::XMLNode::Element),
        );

        envelope
            .with_child(header)
            .with_child(soap_element("Body").with_child(self.body.clone()))
    }

    pub fn from_element(element: &Element) -> OchpResult<Self> {
        if element.name != "Envelope" || element.namespace.as_deref() != Some(SOAP_ENV_NS) {
            return Err(OchpError::Soap(format!(
                "expected SOAP 1.1 Envelope, got '{}'",
                element.name
            )));
        }

        let header = soap_children(element, "Header")
            .flat_map(child_elements)
            .cloned()
            .collect();

        let body = soap_children(element, "Body")
            .next()
            .ok_or_else(|| OchpError::Soap("envelope has no Body".to_string()))?;
        let mut entries = child_elements(body);
        let entry = entries
            .next()
            .ok_or_else(|| OchpError::Soap("Body is empty".to_string()))?;
        if entries.next().is_some() {
            return Err(OchpError::Soap("Body has more than one entry".to_string()));
        }

        Ok(Self {
            header,
            body: entry.clone(),
        })
    }
}
