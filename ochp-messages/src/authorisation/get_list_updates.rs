use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, RoamingAuthorisationInfo};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of the authorisations changed since `last_update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GetRoamingAuthorisationListUpdatesRequest {
    pub last_update: DateTime<Utc>,
}

impl GetRoamingAuthorisationListUpdatesRequest {
    pub fn new(last_update: DateTime<Utc>) -> Self {
        Self { last_update }
    }
}

impl FromXml for GetRoamingAuthorisationListUpdatesRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            last_update: element.map_date_time("lastUpdate")?,
        })
    }
}

impl ToXml for GetRoamingAuthorisationListUpdatesRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_date_time("lastUpdate", &self.last_update)
    }
}

impl OchpMessage for GetRoamingAuthorisationListUpdatesRequest {
    const ELEMENT: &'static str = "GetRoamingAuthorisationListUpdatesRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetRoamingAuthorisationListUpdatesResponse {
    pub result: ResultStatus,
    pub authorisations: Vec<RoamingAuthorisationInfo>,
}

impl GetRoamingAuthorisationListUpdatesResponse {
    pub fn ok(authorisations: Vec<RoamingAuthorisationInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            authorisations,
        }
    }
}

impl FromXml for GetRoamingAuthorisationListUpdatesResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            authorisations: element.map_elements("roamingAuthorisationInfoArray")?,
        })
    }
}

impl ToXml for GetRoamingAuthorisationListUpdatesResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("roamingAuthorisationInfoArray", &self.authorisations)
    }
}

impl OchpMessage for GetRoamingAuthorisationListUpdatesResponse {
    const ELEMENT: &'static str = "GetRoamingAuthorisationListUpdatesResponse";
}

impl OchpResponse for GetRoamingAuthorisationListUpdatesResponse {
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
