//! E-mobility tokens

use crate::types::{TokenRepresentation, TokenSubType, TokenType};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Token that identifies a driver at a charge point
///
/// ```xml
/// <ns:emtId representation="plain">
///   <ns:instance>04A2B3C4D5E6F7</ns:instance>
///   <ns:tokenType><ns:TokenType>rfid</ns:TokenType></ns:tokenType>
///   <ns:tokenSubType><ns:TokenSubType>mifareCls</ns:TokenSubType></ns:tokenSubType>
/// </ns:emtId>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmtId {
    pub representation: TokenRepresentation,
    /// Token value, hex encoded when hashed
    pub instance: String,
    pub token_type: TokenType,
    pub token_sub_type: Option<TokenSubType>,
}

impl EmtId {
    pub fn new(
        representation: TokenRepresentation,
        instance: impl Into<String>,
        token_type: TokenType,
    ) -> Self {
        Self {
            representation,
            instance: instance.into(),
            token_type,
            token_sub_type: None,
        }
    }

    /// Plain RFID token
    pub fn rfid(instance: impl Into<String>, sub_type: TokenSubType) -> Self {
        Self::new(TokenRepresentation::Plain, instance, TokenType::Rfid).with_sub_type(sub_type)
    }

    pub fn with_sub_type(mut self, sub_type: TokenSubType) -> Self {
        self.token_sub_type = Some(sub_type);
        self
    }
}

impl FromXml for EmtId {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            representation: element.map_attribute("representation")?,
            instance: element.map_text("instance")?,
            token_type: element.map_wrapped("tokenType", "TokenType")?,
            token_sub_type: element.map_wrapped_opt("tokenSubType", "TokenSubType")?,
        })
    }
}

impl ToXml for EmtId {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_attribute("representation", self.representation)
            .with_value("instance", &self.instance)
            .with_wrapped("tokenType", "TokenType", self.token_type)
            .with_opt_wrapped("tokenSubType", "TokenSubType", self.token_sub_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ochp_core::xml::parse_element;
    use ochp_core::OchpError;

    #[test]
    fn test_parse_from_text() {
        let element = parse_element(
            r#"<ns:emtId xmlns:ns="http://ochp.eu/1.4" representation="sha-256">
                 <ns:instance>9F86D081884C7D65</ns:instance>
                 <ns:tokenType><ns:TokenType>remote</ns:TokenType></ns:tokenType>
               </ns:emtId>"#,
        )
        .unwrap();
        let emt_id = EmtId::from_xml(&element).unwrap();
        assert_eq!(emt_id.representation, TokenRepresentation::Sha256);
        assert_eq!(emt_id.token_type, TokenType::Remote);
        assert_eq!(emt_id.token_sub_type, None);
    }

    #[test]
    fn test_round_trip() {
        let emt_id = EmtId::rfid("04A2B3C4D5E6F7", TokenSubType::MifareClassic);
        assert_eq!(EmtId::from_xml(&emt_id.to_xml_named("emtId")).unwrap(), emt_id);
    }

    #[test]
    fn test_representation_is_required() {
        let element = ochp_element("emtId")
            .with_value("instance", "1")
            .with_wrapped("tokenType", "TokenType", "rfid");
        assert!(matches!(
            EmtId::from_xml(&element),
            Err(OchpError::MissingAttribute { .. })
        ));
    }
}
