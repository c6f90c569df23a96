use crate::message::OchpMessage;
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, DirectId, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// End of a direct session, releasing the EVSE
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseEvseRequest {
    pub direct_id: DirectId,
}

impl ReleaseEvseRequest {
    pub fn new(direct_id: DirectId) -> Self {
        Self { direct_id }
    }
}

impl FromXml for ReleaseEvseRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            direct_id: element.map_value("directId")?,
        })
    }
}

impl ToXml for ReleaseEvseRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_value("directId", &self.direct_id)
    }
}

impl OchpMessage for ReleaseEvseRequest {
    const ELEMENT: &'static str = "ReleaseEVSERequest";
}

result_response! {
    ReleaseEvseResponse => "ReleaseEVSEResponse"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::OchpResponse;
    use ochp_core::OchpError;

    #[test]
    fn test_round_trip() {
        let request = ReleaseEvseRequest::new(DirectId::parse("DE*ABC*4711").unwrap());
        assert_eq!(ReleaseEvseRequest::try_parse(&request.to_xml()).unwrap(), request);

        let response = ReleaseEvseResponse::invalid_id("unknown session");
        assert_eq!(ReleaseEvseResponse::try_parse(&response.to_xml()).unwrap(), response);
    }

    #[test]
    fn test_malformed_direct_id() {
        let element = ochp_element(ReleaseEvseRequest::ELEMENT).with_value("directId", "not a session");
        assert!(matches!(
            ReleaseEvseRequest::try_parse(&element),
            Err(OchpError::InvalidValue { .. })
        ));
    }
}
