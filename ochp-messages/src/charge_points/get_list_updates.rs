use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{ChargePointInfo, ResultStatus};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of the charge points changed since `last_update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GetChargePointListUpdatesRequest {
    pub last_update: DateTime<Utc>,
}

impl GetChargePointListUpdatesRequest {
    pub fn new(last_update: DateTime<Utc>) -> Self {
        Self { last_update }
    }
}

impl FromXml for GetChargePointListUpdatesRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            last_update: element.map_date_time("lastUpdate")?,
        })
    }
}

impl ToXml for GetChargePointListUpdatesRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_date_time("lastUpdate", &self.last_update)
    }
}

impl OchpMessage for GetChargePointListUpdatesRequest {
    const ELEMENT: &'static str = "GetChargePointListUpdatesRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetChargePointListUpdatesResponse {
    pub result: ResultStatus,
    pub charge_point_infos: Vec<ChargePointInfo>,
}

impl GetChargePointListUpdatesResponse {
    pub fn ok(charge_point_infos: Vec<ChargePointInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            charge_point_infos,
        }
    }
}

impl FromXml for GetChargePointListUpdatesResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            charge_point_infos: element.map_elements("chargePointInfoArray")?,
        })
    }
}

impl ToXml for GetChargePointListUpdatesResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("chargePointInfoArray", &self.charge_point_infos)
    }
}

impl OchpMessage for GetChargePointListUpdatesResponse {
    const ELEMENT: &'static str = "GetChargePointListUpdatesResponse";
}

impl OchpResponse for GetChargePointListUpdatesResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            charge_point_infos: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
