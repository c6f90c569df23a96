use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{EvseStatus, ParkingStatus, ResultStatus};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of status entries, optionally only those changed since `start_date_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetStatusRequest {
    pub start_date_time: Option<DateTime<Utc>>,
}

impl GetStatusRequest {
    pub fn new(start_date_time: Option<DateTime<Utc>>) -> Self {
        Self { start_date_time }
    }
}

impl FromXml for GetStatusRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            start_date_time: element.map_date_time_opt("startDateTime")?,
        })
    }
}

impl ToXml for GetStatusRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_opt_date_time("startDateTime", self.start_date_time.as_ref())
    }
}

impl OchpMessage for GetStatusRequest {
    const ELEMENT: &'static str = "GetStatusRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetStatusResponse {
    pub result: ResultStatus,
    pub evses: Vec<EvseStatus>,
    pub parkings: Vec<ParkingStatus>,
}

impl GetStatusResponse {
    pub fn ok(evses: Vec<EvseStatus>, parkings: Vec<ParkingStatus>) -> Self {
        Self {
            result: ResultStatus::ok(),
            evses,
            parkings,
        }
    }
}

impl FromXml for GetStatusResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            evses: element.map_elements("evse")?,
            parkings: element.map_elements("parking")?,
        })
    }
}

impl ToXml for GetStatusResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("evse", &self.evses)
            .with_elements("parking", &self.parkings)
    }
}

impl OchpMessage for GetStatusResponse {
    const ELEMENT: &'static str = "GetStatusResponse";
}

impl OchpResponse for GetStatusResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
