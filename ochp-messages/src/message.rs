//! Message traits shared by every OCHP request and response

use crate::types::{ResultCode, ResultStatus};
use ochp_core::xml::parse_element;
use ochp_core::{ElementExt, FromXml, OchpError, OchpResult, ParseFailure, ToXml};
use xmltree::Element;

/// A top-level OCHP message with a fixed element name
pub trait OchpMessage: FromXml + ToXml {
    /// Local name of the message element in the OCHP namespace
    const ELEMENT: &'static str;

    /// Serialize the message as its top-level element
    fn to_xml(&self) -> Element {
        self.to_xml_named(Self::ELEMENT)
    }

    /// Read the message from its top-level element
    ///
    /// Fails with `UnexpectedElement` if the element is not this message.
    fn try_parse(element: &Element) -> OchpResult<Self> {
        if !element.is_ochp(Self::ELEMENT) {
            return Err(OchpError::UnexpectedElement {
                expected: Self::ELEMENT.to_string(),
                actual: match &element.namespace {
                    Some(namespace) => format!("{{{}}}{}", namespace, element.name),
                    None => element.name.clone(),
                },
            });
        }
        Self::from_xml(element)
    }

    /// Read the message, reporting failures instead of returning them
    fn parse(element: &Element, on_failure: Option<&mut dyn FnMut(ParseFailure)>) -> Option<Self> {
        match Self::try_parse(element) {
            Ok(message) => Some(message),
            Err(error) => {
                ParseFailure::new(element, error).report(on_failure);
                None
            }
        }
    }

    fn try_parse_text(text: &str) -> OchpResult<Self> {
        Self::try_parse(&parse_element(text)?)
    }

    fn parse_text(text: &str, on_failure: Option<&mut dyn FnMut(ParseFailure)>) -> Option<Self> {
        match parse_element(text) {
            Ok(element) => Self::parse(&element, on_failure),
            Err(error) => {
                ParseFailure::from_text(text, error).report(on_failure);
                None
            }
        }
    }
}

/// A response message carrying a [`ResultStatus`]
///
/// Payload-carrying responses add inherent `ok(..)` constructors; the error
/// outcomes never carry a payload and are shared here.
pub trait OchpResponse: OchpMessage {
    fn from_result(result: ResultStatus) -> Self;

    fn result(&self) -> &ResultStatus;

    fn is_ok(&self) -> bool {
        self.result().code == ResultCode::Ok
    }

    fn not_authorized(description: impl Into<String>) -> Self {
        Self::from_result(ResultStatus::not_authorized(description))
    }

    fn invalid_id(description: impl Into<String>) -> Self {
        Self::from_result(ResultStatus::invalid_id(description))
    }

    fn server(description: impl Into<String>) -> Self {
        Self::from_result(ResultStatus::server(description))
    }

    fn format(description: impl Into<String>) -> Self {
        Self::from_result(ResultStatus::format(description))
    }
}

/// Element name of the result block in every response
pub(crate) const RESULT: &str = "result";

/// Fail with `MissingElement` if a `+` child list is empty
pub(crate) fn require_elements<T>(element: &Element, name: &str, items: Vec<T>) -> OchpResult<Vec<T>> {
    if items.is_empty() {
        return Err(OchpError::MissingElement(format!("{}/{}", element.name, name)));
    }
    Ok(items)
}

/// Fail with `InvalidArgument` if a list handed to a constructor is empty
pub(crate) fn require_items<T>(what: &str, items: Vec<T>) -> OchpResult<Vec<T>> {
    if items.is_empty() {
        return Err(OchpError::InvalidArgument(format!("at least one {} is required", what)));
    }
    Ok(items)
}
