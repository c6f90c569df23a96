use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, RoamingAuthorisationInfo};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of the complete roaming authorisation list, replacing the previous one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetRoamingAuthorisationListRequest {
    authorisations: Vec<RoamingAuthorisationInfo>,
}

impl SetRoamingAuthorisationListRequest {
    pub fn new(authorisations: Vec<RoamingAuthorisationInfo>) -> OchpResult<Self> {
        Ok(Self {
            authorisations: require_items("roaming authorisation", authorisations)?,
        })
    }

    pub fn authorisations(&self) -> &[RoamingAuthorisationInfo] {
        &self.authorisations
    }
}

impl FromXml for SetRoamingAuthorisationListRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            authorisations: require_elements(
                element,
                "roamingAuthorisationInfoArray",
                element.map_elements("roamingAuthorisationInfoArray")?,
            )?,
        })
    }
}

impl ToXml for SetRoamingAuthorisationListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("roamingAuthorisationInfoArray", &self.authorisations)
    }
}

impl OchpMessage for SetRoamingAuthorisationListRequest {
    const ELEMENT: &'static str = "SetRoamingAuthorisationListRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SetRoamingAuthorisationListResponse {
    pub result: ResultStatus,
    pub refused: Vec<RoamingAuthorisationInfo>,
}

impl SetRoamingAuthorisationListResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn partly(description: impl Into<String>, refused: Vec<RoamingAuthorisationInfo>) -> Self {
        Self {
            result: ResultStatus::partly(description),
            refused,
        }
    }
}

impl FromXml for SetRoamingAuthorisationListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refused: element.map_elements("refusedRoamingAuthorisationInfo")?,
        })
    }
}

impl ToXml for SetRoamingAuthorisationListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("refusedRoamingAuthorisationInfo", &self.refused)
    }
}

impl OchpMessage for SetRoamingAuthorisationListResponse {
    const ELEMENT: &'static str = "SetRoamingAuthorisationListResponse";
}

impl OchpResponse for SetRoamingAuthorisationListResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            refused: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
