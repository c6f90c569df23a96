//! Outcome of an OCHP operation

use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

wire_enum! {
    /// Fixed outcome vocabulary of every OCHP response
    ResultCode {
        /// Data accepted and processed
        Ok => "ok",
        /// Only part of the data was accepted
        Partly => "partly",
        /// Wrong username and/or password
        NotAuthorized => "not-authorized",
        /// One or more identifiers are unknown or malformed
        InvalidId => "invalid-id",
        /// Internal server error
        Server => "server",
        /// The request did not follow the expected data format
        Format => "format",
    }
}

/// Result block attached to every response
///
/// ```xml
/// <ns:result>
///   <ns:resultCode>
///     <ns:resultCode>ok</ns:resultCode>
///   </ns:resultCode>
///   <ns:resultDescription>?</ns:resultDescription>
/// </ns:result>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultStatus {
    pub code: ResultCode,
    pub description: Option<String>,
}

impl ResultStatus {
    pub fn new(code: ResultCode, description: Option<String>) -> Self {
        Self { code, description }
    }

    pub fn ok() -> Self {
        Self::new(ResultCode::Ok, None)
    }

    pub fn partly(description: impl Into<String>) -> Self {
        Self::new(ResultCode::Partly, Some(description.into()))
    }

    pub fn not_authorized(description: impl Into<String>) -> Self {
        Self::new(ResultCode::NotAuthorized, Some(description.into()))
    }

    pub fn invalid_id(description: impl Into<String>) -> Self {
        Self::new(ResultCode::InvalidId, Some(description.into()))
    }

    pub fn server(description: impl Into<String>) -> Self {
        Self::new(ResultCode::Server, Some(description.into()))
    }

    pub fn format(description: impl Into<String>) -> Self {
        Self::new(ResultCode::Format, Some(description.into()))
    }

    /// Replace the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.code == ResultCode::Ok
    }
}

impl Default for ResultStatus {
    fn default() -> Self {
        Self::ok()
    }
}

impl FromXml for ResultStatus {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            code: element.map_wrapped("resultCode", "resultCode")?,
            description: element.map_text_opt("resultDescription")?,
        })
    }
}

impl ToXml for ResultStatus {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_wrapped("resultCode", "resultCode", self.code)
            .with_opt_value("resultDescription", self.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ochp_core::xml::{element_to_string, parse_element};

    #[test]
    fn test_wire_strings() {
        assert_eq!(ResultCode::NotAuthorized.to_string(), "not-authorized");
        assert_eq!("invalid-id".parse::<ResultCode>().unwrap(), ResultCode::InvalidId);
        assert!("nope".parse::<ResultCode>().is_err());
        assert_eq!(ResultCode::ALL.len(), 6);
    }

    #[test]
    fn test_xml_round_trip() {
        let result = ResultStatus::partly("2 of 3 accepted");
        let parsed = ResultStatus::from_xml(&result.to_xml_named("result")).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_parse_from_text() {
        let element = parse_element(
            r#"<ns:result xmlns:ns="http://ochp.eu/1.4">
                 <ns:resultCode><ns:resultCode>server</ns:resultCode></ns:resultCode>
               </ns:result>"#,
        )
        .unwrap();
        let result = ResultStatus::from_xml(&element).unwrap();
        assert_eq!(result.code, ResultCode::Server);
        assert_eq!(result.description, None);
    }

    #[test]
    fn test_empty_and_padded_descriptions_round_trip() {
        for result in [
            ResultStatus::invalid_id(""),
            ResultStatus::server("  retry later \n"),
        ] {
            let parsed = ResultStatus::from_xml(&result.to_xml_named("result")).unwrap();
            assert_eq!(parsed, result);
        }
    }

    #[test]
    fn test_absent_description_is_omitted() {
        let xml = element_to_string(&ResultStatus::ok().to_xml_named("result"));
        assert!(!xml.contains("resultDescription"));
    }
}
