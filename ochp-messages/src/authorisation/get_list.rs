use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, RoamingAuthorisationInfo};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of the complete roaming authorisation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetRoamingAuthorisationListRequest;

impl FromXml for GetRoamingAuthorisationListRequest {
    fn from_xml(_element: &Element) -> OchpResult<Self> {
        Ok(Self)
    }
}

impl ToXml for GetRoamingAuthorisationListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
    }
}

impl OchpMessage for GetRoamingAuthorisationListRequest {
    const ELEMENT: &'static str = "GetRoamingAuthorisationListRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetRoamingAuthorisationListResponse {
    pub result: ResultStatus,
    pub authorisations: Vec<RoamingAuthorisationInfo>,
}

impl GetRoamingAuthorisationListResponse {
    pub fn ok(authorisations: Vec<RoamingAuthorisationInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            authorisations,
        }
    }
}

impl FromXml for GetRoamingAuthorisationListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            authorisations: element.map_elements("roamingAuthorisationInfoArray")?,
        })
    }
}

impl ToXml for GetRoamingAuthorisationListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("roamingAuthorisationInfoArray", &self.authorisations)
    }
}

impl OchpMessage for GetRoamingAuthorisationListResponse {
    const ELEMENT: &'static str = "GetRoamingAuthorisationListResponse";
}

impl OchpResponse for GetRoamingAuthorisationListResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            authorisations: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
