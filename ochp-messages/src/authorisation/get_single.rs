use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{EmtId, ResultStatus, RoamingAuthorisationInfo};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Live lookup of a single token that is not in the local list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetSingleRoamingAuthorisationRequest {
    pub emt_id: EmtId,
}

impl GetSingleRoamingAuthorisationRequest {
    pub fn new(emt_id: EmtId) -> Self {
        Self { emt_id }
    }
}

impl FromXml for GetSingleRoamingAuthorisationRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            emt_id: element.map_element("emtId")?,
        })
    }
}

impl ToXml for GetSingleRoamingAuthorisationRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_element("emtId", &self.emt_id)
    }
}

impl OchpMessage for GetSingleRoamingAuthorisationRequest {
    const ELEMENT: &'static str = "GetSingleRoamingAuthorisationRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetSingleRoamingAuthorisationResponse {
    pub result: ResultStatus,
    /// Absent if the token is unknown
    pub authorisation: Option<RoamingAuthorisationInfo>,
}

impl GetSingleRoamingAuthorisationResponse {
    pub fn ok(authorisation: RoamingAuthorisationInfo) -> Self {
        Self {
            result: ResultStatus::ok(),
            authorisation: Some(authorisation),
        }
    }
}

impl FromXml for GetSingleRoamingAuthorisationResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            authorisation: element.map_element_opt("roamingAuthorisationInfo")?,
        })
    }
}

impl ToXml for GetSingleRoamingAuthorisationResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_opt_element("roamingAuthorisationInfo", self.authorisation.as_ref())
    }
}

impl OchpMessage for GetSingleRoamingAuthorisationResponse {
    const ELEMENT: &'static str = "GetSingleRoamingAuthorisationResponse";
}

impl OchpResponse for GetSingleRoamingAuthorisationResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            authorisation: None,
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::roaming_authorisation_info::tests::sample_authorisation;
    use crate::types::{ResultCode, TokenSubType};

    #[test]
    fn test_request_round_trip() {
        let request = GetSingleRoamingAuthorisationRequest::new(EmtId::rfid(
            "04A2B3C4D5E6F7",
            TokenSubType::MifareClassic,
        ));
        assert_eq!(
            GetSingleRoamingAuthorisationRequest::try_parse(&request.to_xml()).unwrap(),
            request
        );
    }

    #[test]
    fn test_found() {
        let response = GetSingleRoamingAuthorisationResponse::ok(sample_authorisation("EE01"));
        let parsed = GetSingleRoamingAuthorisationResponse::try_parse(&response.to_xml()).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_unknown_token() {
        let response = GetSingleRoamingAuthorisationResponse::invalid_id("unknown token");
        let element = response.to_xml();
        assert!(element.child("roamingAuthorisationInfo").is_none());
        let parsed = GetSingleRoamingAuthorisationResponse::try_parse(&element).unwrap();
        assert_eq!(parsed.result.code, ResultCode::InvalidId);
        assert_eq!(parsed.authorisation, None);
    }
}
