use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, RoamingAuthorisationInfo};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of new or changed roaming authorisations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateRoamingAuthorisationListRequest {
    authorisations: Vec<RoamingAuthorisationInfo>,
}

impl UpdateRoamingAuthorisationListRequest {
    pub fn new(authorisations: Vec<RoamingAuthorisationInfo>) -> OchpResult<Self> {
        Ok(Self {
            authorisations: require_items("roaming authorisation", authorisations)?,
        })
    }

    pub fn authorisations(&self) -> &[RoamingAuthorisationInfo] {
        &self.authorisations
    }
}

impl FromXml for UpdateRoamingAuthorisationListRequest {
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

impl ToXml for UpdateRoamingAuthorisationListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("roamingAuthorisationInfoArray", &self.authorisations)
    }
}

impl OchpMessage for UpdateRoamingAuthorisationListRequest {
    const ELEMENT: &'static str = "UpdateRoamingAuthorisationListRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UpdateRoamingAuthorisationListResponse {
    pub result: ResultStatus,
    pub refused: Vec<RoamingAuthorisationInfo>,
}

impl UpdateRoamingAuthorisationListResponse {
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

impl FromXml for UpdateRoamingAuthorisationListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refused: element.map_elements("refusedRoamingAuthorisationInfo")?,
        })
    }
}

impl ToXml for UpdateRoamingAuthorisationListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("refusedRoamingAuthorisationInfo", &self.refused)
    }
}

impl OchpMessage for UpdateRoamingAuthorisationListResponse {
    const ELEMENT: &'static str = "UpdateRoamingAuthorisationListResponse";
}

impl OchpResponse for UpdateRoamingAuthorisationListResponse {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::roaming_authorisation_info::tests::sample_authorisation;

    #[test]
    fn test_round_trip() {
        let request = UpdateRoamingAuthorisationListRequest::new(vec![sample_authorisation("DD01")]).unwrap();
        assert_eq!(
            UpdateRoamingAuthorisationListRequest::try_parse(&request.to_xml()).unwrap(),
            request
        );

        let response = UpdateRoamingAuthorisationListResponse::ok();
        let parsed = UpdateRoamingAuthorisationListResponse::try_parse(&response.to_xml()).unwrap();
        assert!(parsed.is_ok());
        assert!(parsed.refused.is_empty());
    }
}
